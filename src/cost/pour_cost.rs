use serde::{Deserialize, Serialize};

use crate::units::{convert_volume, Volume, VolumeUnit};

/// 재료 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientKind {
    Spirit,
    Liqueur,
    Wine,
    Beer,
    Mixer,
    Juice,
    Syrup,
    Bitters,
    Other,
}

/// 병 단위로 구매하는 재료 정보.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 병 용량
    pub bottle_volume: Volume,
    /// 병 구매가 [기준 통화]
    pub bottle_price: f64,
    /// 단품 판매 여부. false면 원가 백분율/마진 표시는 의미가 없다.
    pub sellable: bool,
    pub kind: IngredientKind,
}

impl Ingredient {
    /// 병 용량과 구매가의 불변 조건을 검사한다.
    pub fn validate(&self) -> Result<(), CostError> {
        if self.bottle_volume.value <= 0.0 {
            return Err(CostError::InvalidBottleVolume(self.bottle_volume.value));
        }
        if self.bottle_price < 0.0 {
            return Err(CostError::InvalidBottlePrice(self.bottle_price));
        }
        Ok(())
    }
}

/// 1회 제공량(푸어) 정의.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PourSpec {
    pub amount: f64,
    pub unit: VolumeUnit,
}

/// 원가 계산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CostError {
    /// 병 용량이 0 이하
    InvalidBottleVolume(f64),
    /// 병 구매가가 음수
    InvalidBottlePrice(f64),
    /// 푸어 양이 0 이하
    InvalidPourAmount(f64),
    /// 목표 원가율이 0 이하
    InvalidTargetPercent(f64),
}

impl std::fmt::Display for CostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostError::InvalidBottleVolume(v) => write!(f, "병 용량이 올바르지 않습니다: {v}"),
            CostError::InvalidBottlePrice(p) => write!(f, "병 구매가가 올바르지 않습니다: {p}"),
            CostError::InvalidPourAmount(a) => write!(f, "푸어 양이 올바르지 않습니다: {a}"),
            CostError::InvalidTargetPercent(p) => {
                write!(f, "목표 원가율이 올바르지 않습니다: {p}%")
            }
        }
    }
}

impl std::error::Error for CostError {}

/// 잔당 원가 계산 결과. 모든 금액은 입력과 동일한 통화 기준이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostResult {
    /// 푸어 단위당 원가 [통화/단위]
    pub cost_per_unit_volume: f64,
    /// 1회 제공량 원가 [통화]
    pub cost_per_pour: f64,
    /// 목표 원가율 기준 권장 판매가 [통화]
    pub suggested_price: f64,
    /// 실제(또는 권장) 판매가 대비 원가 백분율 [%]
    pub pour_cost_percentage: f64,
    /// 판매가 - 원가 [통화]
    pub profit_margin: f64,
}

/// 단위 체적당 원가를 계산한다. 병 용량은 푸어와 같은 단위로 환산된 값이어야 한다.
pub fn cost_per_unit_volume(
    bottle_price: f64,
    bottle_volume_in_pour_unit: f64,
) -> Result<f64, CostError> {
    if bottle_volume_in_pour_unit <= 0.0 {
        return Err(CostError::InvalidBottleVolume(bottle_volume_in_pour_unit));
    }
    if bottle_price < 0.0 {
        return Err(CostError::InvalidBottlePrice(bottle_price));
    }
    Ok(bottle_price / bottle_volume_in_pour_unit)
}

/// 1회 제공량 원가.
pub fn cost_per_pour(cost_per_unit_volume: f64, pour_amount: f64) -> f64 {
    cost_per_unit_volume * pour_amount
}

/// 목표 원가율을 만족하는 권장 판매가.
pub fn suggested_price(cost_per_pour: f64, target_pour_cost_percent: f64) -> Result<f64, CostError> {
    if target_pour_cost_percent <= 0.0 {
        return Err(CostError::InvalidTargetPercent(target_pour_cost_percent));
    }
    Ok(cost_per_pour / (target_pour_cost_percent / 100.0))
}

/// 판매가 대비 원가 백분율.
///
/// 판매가가 0 이하이면 백분율이 의미가 없으므로 0을 반환한다.
/// 단품 판매하지 않는 재료에도 동일한 0 센티널을 일관되게 적용한다.
pub fn pour_cost_percentage(cost_per_pour: f64, actual_price: f64) -> f64 {
    if actual_price > 0.0 {
        cost_per_pour / actual_price * 100.0
    } else {
        0.0
    }
}

/// 판매가에서 원가를 뺀 마진.
pub fn profit_margin(actual_price: f64, cost_per_pour: f64) -> f64 {
    actual_price - cost_per_pour
}

/// 재료와 푸어 사양으로 전체 원가 체인을 계산한다.
///
/// 실제 판매가가 없으면 권장 판매가를 기준으로 백분율과 마진을 구한다.
pub fn compute(
    ingredient: &Ingredient,
    pour: &PourSpec,
    target_pour_cost_percent: f64,
    actual_price: Option<f64>,
) -> Result<CostResult, CostError> {
    ingredient.validate()?;
    if pour.amount <= 0.0 {
        return Err(CostError::InvalidPourAmount(pour.amount));
    }
    let bottle_in_pour_unit = convert_volume(
        ingredient.bottle_volume.value,
        ingredient.bottle_volume.unit,
        pour.unit,
    );
    let per_unit = cost_per_unit_volume(ingredient.bottle_price, bottle_in_pour_unit)?;
    let per_pour = cost_per_pour(per_unit, pour.amount);
    let suggested = suggested_price(per_pour, target_pour_cost_percent)?;
    let price = actual_price.unwrap_or(suggested);
    let percentage = if ingredient.sellable {
        pour_cost_percentage(per_pour, price)
    } else {
        0.0
    };
    Ok(CostResult {
        cost_per_unit_volume: per_unit,
        cost_per_pour: per_pour,
        suggested_price: suggested,
        pour_cost_percentage: percentage,
        profit_margin: profit_margin(price, per_pour),
    })
}

/// 목표 대비 성과 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Warning,
    Poor,
}

/// Good 구간이 끝나는 목표 대비 편차 [%p].
pub const GOOD_BAND_POINTS: f64 = 3.0;
/// Warning 구간이 끝나는 목표 대비 편차 [%p]. 이를 넘으면 Poor.
pub const WARNING_BAND_POINTS: f64 = 7.0;

/// 원가 백분율을 목표 대비 편차로 구간 판정한다.
///
/// 목표 이하는 Excellent, +3%p 이내 Good, +7%p 이내 Warning, 초과는 Poor.
/// 슬라이더/성과 바 색상도 이 함수 하나만 쓴다.
pub fn performance_tier(pour_cost_percentage: f64, goal_percentage: f64) -> PerformanceTier {
    let deviation = pour_cost_percentage - goal_percentage;
    if deviation <= 0.0 {
        PerformanceTier::Excellent
    } else if deviation <= GOOD_BAND_POINTS {
        PerformanceTier::Good
    } else if deviation <= WARNING_BAND_POINTS {
        PerformanceTier::Warning
    } else {
        PerformanceTier::Poor
    }
}
