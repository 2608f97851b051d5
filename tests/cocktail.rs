//! 칵테일 원가 집계 테스트.
use pour_cost_toolbox::cost::{
    cocktail_total_cost, compute_cocktail, CocktailComponent, Ingredient, IngredientKind, PourSpec,
};
use pour_cost_toolbox::units::{Volume, VolumeUnit};

fn component(
    bottle_ml: f64,
    bottle_price: f64,
    pour_oz: f64,
    kind: IngredientKind,
) -> CocktailComponent {
    CocktailComponent {
        ingredient: Ingredient {
            bottle_volume: Volume::new(bottle_ml, VolumeUnit::Milliliter),
            bottle_price,
            sellable: false,
            kind,
        },
        pour: PourSpec {
            amount: pour_oz,
            unit: VolumeUnit::Ounce,
        },
    }
}

fn margarita() -> Vec<CocktailComponent> {
    vec![
        component(750.0, 24.0, 2.0, IngredientKind::Spirit),
        component(750.0, 15.0, 1.0, IngredientKind::Liqueur),
        component(1000.0, 5.0, 1.0, IngredientKind::Juice),
    ]
}

#[test]
fn margarita_total_cost() {
    let total = cocktail_total_cost(&margarita()).expect("total");
    // 테킬라 1.8927 + 트리플섹 0.5915 + 라임 0.1479
    assert!((total - 2.6320).abs() < 1e-3, "total={total}");
}

#[test]
fn margarita_full_chain() {
    let result = compute_cocktail(&margarita(), 20.0, None).expect("chain");
    assert_eq!(result.component_costs.len(), 3);
    assert!((result.component_costs[0] - 1.8927).abs() < 1e-3);
    assert!((result.total_cost - 2.6320).abs() < 1e-3);
    assert!((result.suggested_price - 13.1602).abs() < 1e-3);
    assert!((result.pour_cost_percentage - 20.0).abs() < 1e-9);
    assert!((result.profit_margin - (result.suggested_price - result.total_cost)).abs() < 1e-12);
}

#[test]
fn actual_price_drives_percentage() {
    let result = compute_cocktail(&margarita(), 20.0, Some(10.0)).expect("chain");
    let expected = result.total_cost / 10.0 * 100.0;
    assert!((result.pour_cost_percentage - expected).abs() < 1e-9);
}

#[test]
fn empty_cocktail_is_all_zero() {
    let result = compute_cocktail(&[], 20.0, None).expect("chain");
    assert_eq!(result.total_cost, 0.0);
    assert_eq!(result.suggested_price, 0.0);
    assert_eq!(result.pour_cost_percentage, 0.0);
    assert!(result.component_costs.is_empty());
}

#[test]
fn invalid_component_fails_whole_aggregate() {
    let mut components = margarita();
    components[1].pour.amount = 0.0;
    assert!(compute_cocktail(&components, 20.0, None).is_err());
}
