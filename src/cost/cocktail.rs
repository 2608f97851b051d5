use serde::{Deserialize, Serialize};

use crate::cost::pour_cost::{
    self, cost_per_pour, cost_per_unit_volume, profit_margin, CostError, Ingredient, PourSpec,
};
use crate::units::convert_volume;

/// 칵테일 구성 요소. 재료와 그 재료를 따르는 양의 쌍이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CocktailComponent {
    pub ingredient: Ingredient,
    pub pour: PourSpec,
}

/// 칵테일 원가 집계 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct CocktailCostResult {
    /// 구성 요소 원가 합계 [통화]
    pub total_cost: f64,
    /// 목표 원가율 기준 권장 판매가 [통화]
    pub suggested_price: f64,
    /// 실제(또는 권장) 판매가 대비 원가 백분율 [%]
    pub pour_cost_percentage: f64,
    /// 판매가 - 총원가 [통화]
    pub profit_margin: f64,
    /// 입력 순서대로의 구성 요소별 원가 [통화]
    pub component_costs: Vec<f64>,
}

/// 구성 요소 하나의 푸어 원가.
pub fn component_cost(component: &CocktailComponent) -> Result<f64, CostError> {
    component.ingredient.validate()?;
    if component.pour.amount <= 0.0 {
        return Err(CostError::InvalidPourAmount(component.pour.amount));
    }
    let bottle_in_pour_unit = convert_volume(
        component.ingredient.bottle_volume.value,
        component.ingredient.bottle_volume.unit,
        component.pour.unit,
    );
    let per_unit = cost_per_unit_volume(component.ingredient.bottle_price, bottle_in_pour_unit)?;
    Ok(cost_per_pour(per_unit, component.pour.amount))
}

/// 구성 요소 원가의 합.
pub fn cocktail_total_cost(components: &[CocktailComponent]) -> Result<f64, CostError> {
    let mut total = 0.0;
    for component in components {
        total += component_cost(component)?;
    }
    Ok(total)
}

/// 집계 원가에 대한 권장 판매가. 단일 재료와 같은 공식을 쓴다.
pub fn cocktail_suggested_price(
    total_cost: f64,
    target_pour_cost_percent: f64,
) -> Result<f64, CostError> {
    pour_cost::suggested_price(total_cost, target_pour_cost_percent)
}

/// 칵테일 전체 원가 체인을 계산한다.
///
/// 실제 판매가가 없으면 권장 판매가 기준으로 백분율과 마진을 구한다.
pub fn compute_cocktail(
    components: &[CocktailComponent],
    target_pour_cost_percent: f64,
    actual_price: Option<f64>,
) -> Result<CocktailCostResult, CostError> {
    let mut component_costs = Vec::with_capacity(components.len());
    for component in components {
        component_costs.push(component_cost(component)?);
    }
    let total_cost: f64 = component_costs.iter().sum();
    let suggested = cocktail_suggested_price(total_cost, target_pour_cost_percent)?;
    let price = actual_price.unwrap_or(suggested);
    Ok(CocktailCostResult {
        total_cost,
        suggested_price: suggested,
        pour_cost_percentage: pour_cost::pour_cost_percentage(total_cost, price),
        profit_margin: profit_margin(price, total_cost),
        component_costs,
    })
}
