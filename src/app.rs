use std::path::Path;

use crate::config::Config;
use crate::conversion;
use crate::cost;
use crate::currency;
use crate::i18n::{self, Translator};
use crate::scale;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 원가 계산 오류
    Cost(cost::CostError),
    /// 스케일 매핑 오류
    Scale(scale::ScaleError),
    /// 통화 조회/환산 오류
    Currency(currency::CurrencyError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Cost(e) => write!(f, "원가 계산 오류: {e}"),
            AppError::Scale(e) => write!(f, "스케일 매핑 오류: {e}"),
            AppError::Currency(e) => write!(f, "통화 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<cost::CostError> for AppError {
    fn from(value: cost::CostError) -> Self {
        AppError::Cost(value)
    }
}

impl From<scale::ScaleError> for AppError {
    fn from(value: scale::ScaleError) -> Self {
        AppError::Scale(value)
    }
}

impl From<currency::CurrencyError> for AppError {
    fn from(value: currency::CurrencyError) -> Self {
        AppError::Currency(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::PourCost => ui_cli::handle_pour_cost(tr, config)?,
            MenuChoice::Cocktail => ui_cli::handle_cocktail(tr, config)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Currency => ui_cli::handle_currency(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
