use crate::units::{convert_volume, VolumeUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `ml`, `oz`, `tbsp`, `gal` 등을 사용할 수 있다.
pub fn convert(value: f64, from_unit_str: &str, to_unit_str: &str) -> Result<f64, ConversionError> {
    let from = parse_volume_unit(from_unit_str)?;
    let to = parse_volume_unit(to_unit_str)?;
    Ok(convert_volume(value, from, to))
}

/// 체적 단위 문자열을 enum으로 해석한다.
pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ml" | "milliliter" | "millilitre" => Ok(VolumeUnit::Milliliter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "oz" | "floz" | "fl oz" | "ounce" => Ok(VolumeUnit::Ounce),
        "cup" | "cups" => Ok(VolumeUnit::Cup),
        "pt" | "pint" => Ok(VolumeUnit::Pint),
        "qt" | "quart" => Ok(VolumeUnit::Quart),
        "gal" | "gallon" => Ok(VolumeUnit::Gallon),
        "tbsp" | "tablespoon" => Ok(VolumeUnit::Tablespoon),
        "tsp" | "teaspoon" => Ok(VolumeUnit::Teaspoon),
        "drop" | "drops" | "dr" => Ok(VolumeUnit::Drop),
        "splash" | "spl" => Ok(VolumeUnit::Splash),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
