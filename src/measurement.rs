use serde::{Deserialize, Serialize};

use crate::units::{to_milliliter, VolumeUnit};

/// 측정 시스템 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementSystem {
    /// 미국식(oz/tsp/tbsp/cup/qt)
    Us,
    /// 미터법(ml/L)
    Metric,
}

/// 체적을 표시하는 용도 구분. 용도에 따라 기본 단위가 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureContext {
    /// 병 용량(750ml, 1.75L 등)
    Bottle,
    /// 레시피 재료량
    Recipe,
    /// 칵테일 1회 제공량
    Serving,
}

/// 용도별 기본 표시 단위 세트.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub bottle: VolumeUnit,
    pub recipe: VolumeUnit,
    pub serving: VolumeUnit,
}

impl DisplayUnits {
    /// 측정 시스템에 따른 기본 단위 세트를 반환한다.
    pub fn for_system(system: MeasurementSystem) -> Self {
        match system {
            MeasurementSystem::Us => Self {
                bottle: VolumeUnit::Ounce,
                recipe: VolumeUnit::Ounce,
                serving: VolumeUnit::Ounce,
            },
            MeasurementSystem::Metric => Self {
                bottle: VolumeUnit::Milliliter,
                recipe: VolumeUnit::Milliliter,
                serving: VolumeUnit::Milliliter,
            },
        }
    }
}

/// 측정 시스템과 용도에 따른 기본 표시 단위.
pub fn display_unit(system: MeasurementSystem, context: MeasureContext) -> VolumeUnit {
    let units = DisplayUnits::for_system(system);
    match context {
        MeasureContext::Bottle => units.bottle,
        MeasureContext::Recipe => units.recipe,
        MeasureContext::Serving => units.serving,
    }
}

/// 밀리리터 크기에 따라 가장 읽기 좋은 단위를 고른다.
///
/// 미터법은 1000ml에서 L로 넘어가고, 미국식은 tsp → tbsp → oz → cup → qt
/// 순으로 고정 경계에서 단위가 올라간다.
pub fn preferred_unit(value_ml: f64, system: MeasurementSystem) -> VolumeUnit {
    match system {
        MeasurementSystem::Metric => {
            if value_ml < to_milliliter(1.0, VolumeUnit::Liter) {
                VolumeUnit::Milliliter
            } else {
                VolumeUnit::Liter
            }
        }
        MeasurementSystem::Us => {
            if value_ml < to_milliliter(1.0, VolumeUnit::Tablespoon) {
                VolumeUnit::Teaspoon
            } else if value_ml < to_milliliter(1.0, VolumeUnit::Ounce) {
                VolumeUnit::Tablespoon
            } else if value_ml < to_milliliter(1.0, VolumeUnit::Cup) {
                VolumeUnit::Ounce
            } else if value_ml < to_milliliter(1.0, VolumeUnit::Quart) {
                VolumeUnit::Cup
            } else {
                VolumeUnit::Quart
            }
        }
    }
}

/// 용도별 기본 단위를 실제 값 크기로 보정한다.
///
/// 병 용량은 크기에 따라 단위를 올리고(1.75L 매그넘은 L로),
/// 레시피 양은 1 tbsp 미만이면 tsp까지 내려간다.
/// 제공량(Serving)은 잔 단위 일관성을 위해 고정 단위를 유지한다.
pub fn display_unit_for_amount(
    value_ml: f64,
    system: MeasurementSystem,
    context: MeasureContext,
) -> VolumeUnit {
    match context {
        MeasureContext::Serving => display_unit(system, context),
        MeasureContext::Bottle => match system {
            MeasurementSystem::Metric => preferred_unit(value_ml, system),
            MeasurementSystem::Us => display_unit(system, context),
        },
        MeasureContext::Recipe => match system {
            MeasurementSystem::Us => {
                if value_ml < to_milliliter(1.0, VolumeUnit::Ounce) {
                    preferred_unit(value_ml, system)
                } else {
                    display_unit(system, context)
                }
            }
            MeasurementSystem::Metric => display_unit(system, context),
        },
    }
}
