//! 원가 계산 모듈 모음.

pub mod cocktail;
pub mod pour_cost;

pub use cocktail::{
    cocktail_suggested_price, cocktail_total_cost, compute_cocktail, CocktailComponent,
    CocktailCostResult,
};
pub use pour_cost::{
    compute, cost_per_pour, cost_per_unit_volume, performance_tier, pour_cost_percentage,
    profit_margin, suggested_price, CostError, CostResult, Ingredient, IngredientKind,
    PerformanceTier, PourSpec,
};
