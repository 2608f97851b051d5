//! 잔당 원가 계산 체인 회귀 테스트.
use pour_cost_toolbox::cost::{
    compute, cost_per_unit_volume, performance_tier, pour_cost_percentage, profit_margin,
    suggested_price, Ingredient, IngredientKind, PerformanceTier, PourSpec,
};
use pour_cost_toolbox::units::{Volume, VolumeUnit};

fn standard_bottle() -> Ingredient {
    Ingredient {
        bottle_volume: Volume::new(750.0, VolumeUnit::Milliliter),
        bottle_price: 25.0,
        sellable: true,
        kind: IngredientKind::Spirit,
    }
}

#[test]
fn worked_example_750ml_bottle() {
    // 750ml 병 25.00, 1.5oz 푸어, 목표 원가율 20%
    let pour = PourSpec {
        amount: 1.5,
        unit: VolumeUnit::Ounce,
    };
    let result = compute(&standard_bottle(), &pour, 20.0, None).expect("cost chain");
    assert!((result.cost_per_unit_volume - 0.9858).abs() < 1e-3);
    assert!((result.cost_per_pour - 1.4787).abs() < 1e-3);
    assert!((result.suggested_price - 7.3934).abs() < 1e-3);
    // 실제 판매가가 없으면 권장가 기준이므로 원가율은 목표와 같다.
    assert!((result.pour_cost_percentage - 20.0).abs() < 1e-9);
}

#[test]
fn percentage_roundtrips_through_suggested_price() {
    let cost = 1.4787;
    for &p in &[1.0, 5.0, 20.0, 35.0, 99.0] {
        let price = suggested_price(cost, p).expect("price");
        let pct = pour_cost_percentage(cost, price);
        assert!((pct - p).abs() < 1e-9, "p={p}, got {pct}");
    }
}

#[test]
fn margin_identity_holds() {
    assert_eq!(profit_margin(9.0, 1.5) + 1.5, 9.0);
    let margin = profit_margin(7.3934, 1.4787);
    assert!((margin + 1.4787 - 7.3934).abs() < 1e-12);
}

#[test]
fn zero_price_returns_sentinel_not_infinity() {
    let pct = pour_cost_percentage(1.2, 0.0);
    assert_eq!(pct, 0.0);
    assert!(pct.is_finite());
    assert_eq!(pour_cost_percentage(1.2, -3.0), 0.0);
}

#[test]
fn non_sellable_ingredient_gets_zero_percentage() {
    let mut ingredient = standard_bottle();
    ingredient.sellable = false;
    let pour = PourSpec {
        amount: 1.5,
        unit: VolumeUnit::Ounce,
    };
    let result = compute(&ingredient, &pour, 20.0, Some(9.0)).expect("cost chain");
    assert_eq!(result.pour_cost_percentage, 0.0);
    assert!(result.cost_per_pour > 0.0);
}

#[test]
fn invalid_inputs_fail_fast() {
    assert!(cost_per_unit_volume(25.0, 0.0).is_err());
    assert!(cost_per_unit_volume(-1.0, 25.0).is_err());
    assert!(suggested_price(1.0, 0.0).is_err());
    assert!(suggested_price(1.0, -20.0).is_err());

    let pour = PourSpec {
        amount: 0.0,
        unit: VolumeUnit::Ounce,
    };
    assert!(compute(&standard_bottle(), &pour, 20.0, None).is_err());

    let mut bad = standard_bottle();
    bad.bottle_volume.value = 0.0;
    let pour = PourSpec {
        amount: 1.5,
        unit: VolumeUnit::Ounce,
    };
    assert!(compute(&bad, &pour, 20.0, None).is_err());
}

#[test]
fn tier_bands_around_goal() {
    let goal = 20.0;
    assert_eq!(performance_tier(15.0, goal), PerformanceTier::Excellent);
    assert_eq!(performance_tier(20.0, goal), PerformanceTier::Excellent);
    assert_eq!(performance_tier(22.0, goal), PerformanceTier::Good);
    assert_eq!(performance_tier(23.0, goal), PerformanceTier::Good);
    assert_eq!(performance_tier(25.0, goal), PerformanceTier::Warning);
    assert_eq!(performance_tier(27.0, goal), PerformanceTier::Warning);
    assert_eq!(performance_tier(28.0, goal), PerformanceTier::Poor);
    assert_eq!(performance_tier(60.0, goal), PerformanceTier::Poor);
}
