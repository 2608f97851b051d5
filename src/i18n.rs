use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_POUR_COST: &str = "main_menu.pour_cost";
    pub const MAIN_MENU_COCKTAIL: &str = "main_menu.cocktail";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_CURRENCY: &str = "main_menu.currency";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const VOLUME_UNIT_OPTIONS: &str = "unit.volume_options";

    pub const POUR_COST_HEADING: &str = "pour_cost.heading";
    pub const PROMPT_BOTTLE_VOLUME: &str = "prompt.bottle_volume";
    pub const PROMPT_BOTTLE_PRICE: &str = "prompt.bottle_price";
    pub const PROMPT_POUR_AMOUNT: &str = "prompt.pour_amount";
    pub const PROMPT_ACTUAL_PRICE: &str = "prompt.actual_price";
    pub const RESULT_COST_PER_UNIT: &str = "result.cost_per_unit";
    pub const RESULT_COST_PER_POUR: &str = "result.cost_per_pour";
    pub const RESULT_SUGGESTED_PRICE: &str = "result.suggested_price";
    pub const RESULT_POUR_COST_PCT: &str = "result.pour_cost_pct";
    pub const RESULT_PROFIT_MARGIN: &str = "result.profit_margin";
    pub const RESULT_TIER: &str = "result.tier";
    pub const RESULT_BAR_POSITION: &str = "result.bar_position";

    pub const TIER_EXCELLENT: &str = "tier.excellent";
    pub const TIER_GOOD: &str = "tier.good";
    pub const TIER_WARNING: &str = "tier.warning";
    pub const TIER_POOR: &str = "tier.poor";

    pub const COCKTAIL_HEADING: &str = "cocktail.heading";
    pub const COCKTAIL_PROMPT_ADD: &str = "cocktail.prompt_add";
    pub const COCKTAIL_EMPTY: &str = "cocktail.empty";
    pub const COCKTAIL_COMPONENT_COST: &str = "cocktail.component_cost";
    pub const RESULT_TOTAL_COST: &str = "result.total_cost";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const CURRENCY_HEADING: &str = "currency.heading";
    pub const CURRENCY_OPTION_FORMAT: &str = "currency.option_format";
    pub const CURRENCY_OPTION_CONVERT: &str = "currency.option_convert";
    pub const PROMPT_AMOUNT: &str = "prompt.amount";
    pub const PROMPT_CURRENCY_CODE: &str = "prompt.currency_code";
    pub const PROMPT_FROM_CURRENCY: &str = "prompt.from_currency";
    pub const PROMPT_TO_CURRENCY: &str = "prompt.to_currency";
    pub const PROMPT_COMPACT: &str = "prompt.compact";
    pub const CURRENCY_RESULT: &str = "currency.result";
    pub const CURRENCY_RATE_NOTE: &str = "currency.rate_note";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_SYSTEM: &str = "settings.prompt_system";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_PROMPT_GOAL: &str = "settings.prompt_goal";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_POUR_COST: &str = "help.pour_cost";
    pub const HELP_COCKTAIL: &str = "help.cocktail";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_CURRENCY: &str = "help.currency";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pour Cost Toolbox ===",
        MAIN_MENU_POUR_COST => "1) 잔당 원가 계산",
        MAIN_MENU_COCKTAIL => "2) 칵테일 원가 계산",
        MAIN_MENU_UNIT_CONVERSION => "3) 단위 변환기",
        MAIN_MENU_CURRENCY => "4) 통화 도구",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        VOLUME_UNIT_OPTIONS => {
            "체적 단위: 1=ml 2=L 3=oz 4=cup 5=pt 6=qt 7=gal 8=tbsp 9=tsp 10=drops 11=splash"
        }
        POUR_COST_HEADING => "\n-- 잔당 원가 계산 --",
        PROMPT_BOTTLE_VOLUME => "병 용량 값: ",
        PROMPT_BOTTLE_PRICE => "병 구매가: ",
        PROMPT_POUR_AMOUNT => "푸어(1회 제공) 양: ",
        PROMPT_ACTUAL_PRICE => "실제 판매가 (없으면 0 → 권장가 기준): ",
        RESULT_COST_PER_UNIT => "단위당 원가:",
        RESULT_COST_PER_POUR => "잔당 원가:",
        RESULT_SUGGESTED_PRICE => "권장 판매가:",
        RESULT_POUR_COST_PCT => "원가율:",
        RESULT_PROFIT_MARGIN => "마진:",
        RESULT_TIER => "성과 구간:",
        RESULT_BAR_POSITION => "성과 바 위치:",
        TIER_EXCELLENT => "최상",
        TIER_GOOD => "양호",
        TIER_WARNING => "주의",
        TIER_POOR => "미흡",
        COCKTAIL_HEADING => "\n-- 칵테일 원가 계산 --",
        COCKTAIL_PROMPT_ADD => "재료 병 용량 값 (빈 입력이면 집계): ",
        COCKTAIL_EMPTY => "재료가 없습니다.",
        COCKTAIL_COMPONENT_COST => "재료별 원가:",
        RESULT_TOTAL_COST => "총 원가:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: ml, oz, tbsp): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: L, tsp, gal): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        CURRENCY_HEADING => "\n-- 통화 도구 --",
        CURRENCY_OPTION_FORMAT => "1) 금액 서식",
        CURRENCY_OPTION_CONVERT => "2) 통화 환산",
        PROMPT_AMOUNT => "금액: ",
        PROMPT_CURRENCY_CODE => "통화 코드 (빈 입력이면 기준 통화): ",
        PROMPT_FROM_CURRENCY => "출발 통화 코드: ",
        PROMPT_TO_CURRENCY => "도착 통화 코드: ",
        PROMPT_COMPACT => "축약 표기(K/M/B)? (y/N): ",
        CURRENCY_RESULT => "결과:",
        CURRENCY_RATE_NOTE => "참고: 환율은 표시용 고정 근사치입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 측정 시스템  2) 기준 통화  3) 목표 원가율  4) 언어",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_SYSTEM => "측정 시스템 (1=US 2=Metric): ",
        SETTINGS_PROMPT_CURRENCY => "기준 통화 코드: ",
        SETTINGS_PROMPT_GOAL => "목표 원가율 [%]: ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        HELP_POUR_COST => {
            "도움말: 병 용량/구매가와 푸어 양을 입력하면 단위당 원가, 잔당 원가, 권장가, 원가율, 마진을 계산합니다."
        }
        HELP_COCKTAIL => "도움말: 재료를 반복 입력한 뒤 빈 입력으로 집계합니다. 총 원가 기준 권장가를 계산합니다.",
        HELP_UNIT_CONVERSION => "도움말: 값 → 입력/변환 단위 순으로 입력 (예: ml/L/oz/cup/pt/qt/gal/tbsp/tsp/drops/splash).",
        HELP_CURRENCY => "도움말: 금액 서식은 통화별 기본 소수 자릿수를 따르고, 환산은 고정 근사 환율을 씁니다.",
        HELP_SETTINGS => "도움말: 측정 시스템은 표시 단위 기본값을, 목표 원가율은 권장가 계산 기준을 바꿉니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pour Cost Toolbox ===",
        MAIN_MENU_POUR_COST => "1) Pour-cost calculator",
        MAIN_MENU_COCKTAIL => "2) Cocktail cost calculator",
        MAIN_MENU_UNIT_CONVERSION => "3) Unit converter",
        MAIN_MENU_CURRENCY => "4) Currency tools",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        VOLUME_UNIT_OPTIONS => {
            "Volume units: 1=ml 2=L 3=oz 4=cup 5=pt 6=qt 7=gal 8=tbsp 9=tsp 10=drops 11=splash"
        }
        POUR_COST_HEADING => "\n-- Pour-Cost Calculator --",
        PROMPT_BOTTLE_VOLUME => "Bottle volume value: ",
        PROMPT_BOTTLE_PRICE => "Bottle price: ",
        PROMPT_POUR_AMOUNT => "Pour (serving) amount: ",
        PROMPT_ACTUAL_PRICE => "Actual menu price (0 = use suggested): ",
        RESULT_COST_PER_UNIT => "Cost per unit:",
        RESULT_COST_PER_POUR => "Cost per pour:",
        RESULT_SUGGESTED_PRICE => "Suggested price:",
        RESULT_POUR_COST_PCT => "Pour cost:",
        RESULT_PROFIT_MARGIN => "Profit margin:",
        RESULT_TIER => "Performance tier:",
        RESULT_BAR_POSITION => "Performance bar position:",
        TIER_EXCELLENT => "Excellent",
        TIER_GOOD => "Good",
        TIER_WARNING => "Warning",
        TIER_POOR => "Poor",
        COCKTAIL_HEADING => "\n-- Cocktail Cost Calculator --",
        COCKTAIL_PROMPT_ADD => "Ingredient bottle volume (empty line = finish): ",
        COCKTAIL_EMPTY => "No ingredients entered.",
        COCKTAIL_COMPONENT_COST => "Component costs:",
        RESULT_TOTAL_COST => "Total cost:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: ml, oz, tbsp): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: L, tsp, gal): ",
        UNIT_CONVERSION_RESULT => "Result:",
        CURRENCY_HEADING => "\n-- Currency Tools --",
        CURRENCY_OPTION_FORMAT => "1) Format an amount",
        CURRENCY_OPTION_CONVERT => "2) Convert between currencies",
        PROMPT_AMOUNT => "Amount: ",
        PROMPT_CURRENCY_CODE => "Currency code (empty = base currency): ",
        PROMPT_FROM_CURRENCY => "From currency code: ",
        PROMPT_TO_CURRENCY => "To currency code: ",
        PROMPT_COMPACT => "Compact notation (K/M/B)? (y/N): ",
        CURRENCY_RESULT => "Result:",
        CURRENCY_RATE_NOTE => "Note: rates are fixed display-only approximations.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Measurement system  2) Base currency  3) Pour-cost goal  4) Language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_SYSTEM => "Measurement system (1=US 2=Metric): ",
        SETTINGS_PROMPT_CURRENCY => "Base currency code: ",
        SETTINGS_PROMPT_GOAL => "Pour-cost goal [%]: ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        HELP_POUR_COST => {
            "Help: enter bottle volume/price and a pour amount to get cost per unit, cost per pour, suggested price, pour-cost % and margin."
        }
        HELP_COCKTAIL => "Help: enter ingredients repeatedly; an empty line aggregates. Suggested price is computed from total cost.",
        HELP_UNIT_CONVERSION => "Help: value → from/to units (ml/L/oz/cup/pt/qt/gal/tbsp/tsp/drops/splash).",
        HELP_CURRENCY => "Help: formatting follows per-currency default decimals; conversion uses fixed approximate rates.",
        HELP_SETTINGS => "Help: the measurement system changes default display units; the goal changes suggested-price math.",
        _ => "[missing translation]",
    }
}
