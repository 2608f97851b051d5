use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::cost::{
    self, CocktailComponent, Ingredient, IngredientKind, PerformanceTier, PourSpec,
};
use crate::currency::{self, FormatOptions, SeparatorStyle};
use crate::i18n::{keys, Translator};
use crate::measurement::MeasurementSystem;
use crate::scale;
use crate::units::{abbreviation, format_volume, Volume, VolumeUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PourCost,
    Cocktail,
    UnitConversion,
    Currency,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_POUR_COST));
    println!("{}", tr.t(keys::MAIN_MENU_COCKTAIL));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_CURRENCY));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PourCost),
            "2" => return Ok(MenuChoice::Cocktail),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::Currency),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 잔당 원가 계산 메뉴를 처리한다.
pub fn handle_pour_cost(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POUR_COST_HEADING));
    println!("{}", tr.t(keys::HELP_POUR_COST));
    let bottle_value = read_f64(tr, tr.t(keys::PROMPT_BOTTLE_VOLUME))?;
    let bottle_unit = read_volume_unit(tr)?;
    let bottle_price = read_f64(tr, tr.t(keys::PROMPT_BOTTLE_PRICE))?;
    let pour_amount = read_f64(tr, tr.t(keys::PROMPT_POUR_AMOUNT))?;
    let pour_unit = read_volume_unit(tr)?;
    let actual = read_f64(tr, tr.t(keys::PROMPT_ACTUAL_PRICE))?;
    let actual_price = if actual > 0.0 { Some(actual) } else { None };

    let ingredient = Ingredient {
        bottle_volume: Volume::new(bottle_value, bottle_unit),
        bottle_price,
        sellable: true,
        kind: IngredientKind::Spirit,
    };
    let pour = PourSpec {
        amount: pour_amount,
        unit: pour_unit,
    };
    let result = cost::compute(&ingredient, &pour, cfg.pour_cost_goal_percent, actual_price)?;

    let opts = money_options(tr);
    let unit_opts = FormatOptions {
        decimals: Some(4),
        ..opts
    };
    println!(
        "{} {}/{}",
        tr.t(keys::RESULT_COST_PER_UNIT),
        currency::format(result.cost_per_unit_volume, &cfg.base_currency, &unit_opts),
        abbreviation(pour.unit)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_COST_PER_POUR),
        currency::format(result.cost_per_pour, &cfg.base_currency, &opts)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_SUGGESTED_PRICE),
        currency::format(result.suggested_price, &cfg.base_currency, &opts)
    );
    println!(
        "{} {:.1}%",
        tr.t(keys::RESULT_POUR_COST_PCT),
        result.pour_cost_percentage
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_PROFIT_MARGIN),
        currency::format(result.profit_margin, &cfg.base_currency, &opts)
    );
    let tier = cost::performance_tier(result.pour_cost_percentage, cfg.pour_cost_goal_percent);
    println!("{} {}", tr.t(keys::RESULT_TIER), tier_label(tr, tier));
    if let Ok(pos) = scale::to_position(
        result.pour_cost_percentage,
        cfg.pour_cost_goal_percent,
        0.0,
        100.0,
    ) {
        println!("{} {:.2}", tr.t(keys::RESULT_BAR_POSITION), pos);
    }
    Ok(())
}

/// 칵테일 원가 계산 메뉴를 처리한다.
pub fn handle_cocktail(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COCKTAIL_HEADING));
    println!("{}", tr.t(keys::HELP_COCKTAIL));
    let mut components = Vec::new();
    loop {
        let line = read_line(tr.t(keys::COCKTAIL_PROMPT_ADD))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        let bottle_value = match trimmed.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
                continue;
            }
        };
        let bottle_unit = read_volume_unit(tr)?;
        let bottle_price = read_f64(tr, tr.t(keys::PROMPT_BOTTLE_PRICE))?;
        let pour_amount = read_f64(tr, tr.t(keys::PROMPT_POUR_AMOUNT))?;
        let pour_unit = read_volume_unit(tr)?;
        components.push(CocktailComponent {
            ingredient: Ingredient {
                bottle_volume: Volume::new(bottle_value, bottle_unit),
                bottle_price,
                sellable: false,
                kind: IngredientKind::Other,
            },
            pour: PourSpec {
                amount: pour_amount,
                unit: pour_unit,
            },
        });
    }
    if components.is_empty() {
        println!("{}", tr.t(keys::COCKTAIL_EMPTY));
        return Ok(());
    }
    let actual = read_f64(tr, tr.t(keys::PROMPT_ACTUAL_PRICE))?;
    let actual_price = if actual > 0.0 { Some(actual) } else { None };
    let result = cost::compute_cocktail(&components, cfg.pour_cost_goal_percent, actual_price)?;

    let opts = money_options(tr);
    println!("{}", tr.t(keys::COCKTAIL_COMPONENT_COST));
    for (i, component_cost) in result.component_costs.iter().enumerate() {
        println!(
            "  {}. {}",
            i + 1,
            currency::format(*component_cost, &cfg.base_currency, &opts)
        );
    }
    println!(
        "{} {}",
        tr.t(keys::RESULT_TOTAL_COST),
        currency::format(result.total_cost, &cfg.base_currency, &opts)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_SUGGESTED_PRICE),
        currency::format(result.suggested_price, &cfg.base_currency, &opts)
    );
    println!(
        "{} {:.1}%",
        tr.t(keys::RESULT_POUR_COST_PCT),
        result.pour_cost_percentage
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_PROFIT_MARGIN),
        currency::format(result.profit_margin, &cfg.base_currency, &opts)
    );
    let tier = cost::performance_tier(result.pour_cost_percentage, cfg.pour_cost_goal_percent);
    println!("{} {}", tr.t(keys::RESULT_TIER), tier_label(tr, tier));
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(value, from_unit.trim(), to_unit.trim())?;
    let to = conversion::parse_volume_unit(to_unit.trim())?;
    println!(
        "{} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        format_volume(result, to, None)
    );
    Ok(())
}

/// 통화 도구 메뉴를 처리한다.
pub fn handle_currency(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CURRENCY_HEADING));
    println!("{}", tr.t(keys::HELP_CURRENCY));
    println!("{}", tr.t(keys::CURRENCY_OPTION_FORMAT));
    println!("{}", tr.t(keys::CURRENCY_OPTION_CONVERT));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let amount = read_f64(tr, tr.t(keys::PROMPT_AMOUNT))?;
            let code = read_currency_code(tr.t(keys::PROMPT_CURRENCY_CODE), cfg)?;
            let compact = read_line(tr.t(keys::PROMPT_COMPACT))?;
            let opts = FormatOptions {
                compact: compact.trim().eq_ignore_ascii_case("y"),
                ..money_options(tr)
            };
            println!(
                "{} {}",
                tr.t(keys::CURRENCY_RESULT),
                currency::format(amount, &code, &opts)
            );
        }
        "2" => {
            let amount = read_f64(tr, tr.t(keys::PROMPT_AMOUNT))?;
            let from = read_currency_code(tr.t(keys::PROMPT_FROM_CURRENCY), cfg)?;
            let to = read_currency_code(tr.t(keys::PROMPT_TO_CURRENCY), cfg)?;
            let converted = currency::convert(amount, &from, &to, None)?;
            let opts = money_options(tr);
            println!(
                "{} {} = {}",
                tr.t(keys::CURRENCY_RESULT),
                currency::format(amount, &from, &opts),
                currency::format(converted, &to, &opts)
            );
            println!("{}", tr.t(keys::CURRENCY_RATE_NOTE));
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} {:?} / {} / {:.1}% / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.measurement_system,
        cfg.base_currency,
        cfg.pour_cost_goal_percent,
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let s = read_line(tr.t(keys::SETTINGS_PROMPT_SYSTEM))?;
            match s.trim() {
                "1" => cfg.measurement_system = MeasurementSystem::Us,
                "2" => cfg.measurement_system = MeasurementSystem::Metric,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => {
            let c = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
            let code = c.trim().to_uppercase();
            if currency::find_currency(&code).is_some() {
                cfg.base_currency = code;
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
        }
        "3" => {
            let goal = read_f64(tr, tr.t(keys::SETTINGS_PROMPT_GOAL))?;
            if goal > 0.0 && goal < 100.0 {
                cfg.pour_cost_goal_percent = goal;
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
        }
        "4" => {
            let l = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let code = l.trim();
            cfg.language = if code.is_empty() || code == "auto" {
                None
            } else {
                Some(code.to_string())
            };
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 성과 구간 표시 문자열.
fn tier_label(tr: &Translator, tier: PerformanceTier) -> &'static str {
    match tier {
        PerformanceTier::Excellent => tr.t(keys::TIER_EXCELLENT),
        PerformanceTier::Good => tr.t(keys::TIER_GOOD),
        PerformanceTier::Warning => tr.t(keys::TIER_WARNING),
        PerformanceTier::Poor => tr.t(keys::TIER_POOR),
    }
}

/// 언어에 맞는 금액 표기 옵션.
fn money_options(tr: &Translator) -> FormatOptions {
    FormatOptions {
        separator: SeparatorStyle::for_language(tr.language_code()),
        ..FormatOptions::default()
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_volume_unit(tr: &Translator) -> Result<VolumeUnit, AppError> {
    println!("{}", tr.t(keys::VOLUME_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => VolumeUnit::Milliliter,
        "2" => VolumeUnit::Liter,
        "3" => VolumeUnit::Ounce,
        "4" => VolumeUnit::Cup,
        "5" => VolumeUnit::Pint,
        "6" => VolumeUnit::Quart,
        "7" => VolumeUnit::Gallon,
        "8" => VolumeUnit::Tablespoon,
        "9" => VolumeUnit::Teaspoon,
        "10" => VolumeUnit::Drop,
        "11" => VolumeUnit::Splash,
        _ => VolumeUnit::Milliliter,
    };
    Ok(unit)
}

fn read_currency_code(prompt: &str, cfg: &Config) -> Result<String, AppError> {
    let line = read_line(prompt)?;
    let code = line.trim().to_uppercase();
    if code.is_empty() {
        Ok(cfg.base_currency.clone())
    } else {
        Ok(code)
    }
}
