//! 체적 변환 왕복/서식 회귀 테스트.
use pour_cost_toolbox::units::{convert_volume, format_volume, to_milliliter, VolumeUnit};

const ALL_UNITS: [VolumeUnit; 11] = [
    VolumeUnit::Milliliter,
    VolumeUnit::Liter,
    VolumeUnit::Ounce,
    VolumeUnit::Cup,
    VolumeUnit::Pint,
    VolumeUnit::Quart,
    VolumeUnit::Gallon,
    VolumeUnit::Tablespoon,
    VolumeUnit::Teaspoon,
    VolumeUnit::Drop,
    VolumeUnit::Splash,
];

#[test]
fn roundtrip_all_unit_pairs() {
    for &from in &ALL_UNITS {
        for &to in &ALL_UNITS {
            for &v in &[0.3, 1.5, 750.0] {
                let there = convert_volume(v, from, to);
                let back = convert_volume(there, to, from);
                let rel = ((back - v) / v).abs();
                assert!(rel < 1e-6, "{from:?}->{to:?}: {v} -> {back}, rel={rel}");
            }
        }
    }
}

#[test]
fn same_unit_is_identity_bit_for_bit() {
    // 0.1은 이진수로 정확히 표현되지 않으므로 환산을 거치면 오차가 생긴다.
    // 동일 단위는 환산 경로를 타지 않아야 한다.
    let v = 0.1;
    assert_eq!(convert_volume(v, VolumeUnit::Ounce, VolumeUnit::Ounce), v);
}

#[test]
fn known_factors() {
    assert!((to_milliliter(1.0, VolumeUnit::Ounce) - 29.5735).abs() < 1e-9);
    assert!((to_milliliter(1.0, VolumeUnit::Gallon) - 3785.41).abs() < 1e-9);
    assert!((to_milliliter(1.0, VolumeUnit::Drop) - 0.05).abs() < 1e-12);
    assert!((to_milliliter(1.0, VolumeUnit::Splash) - 5.0).abs() < 1e-12);
    let oz = convert_volume(750.0, VolumeUnit::Milliliter, VolumeUnit::Ounce);
    assert!((oz - 25.3605).abs() < 1e-3, "750ml = {oz} oz");
}

#[test]
fn format_uses_per_unit_default_precision() {
    assert_eq!(format_volume(750.0, VolumeUnit::Milliliter, None), "750 ml");
    assert_eq!(format_volume(5.5, VolumeUnit::Milliliter, None), "5.5 ml");
    assert_eq!(format_volume(0.75, VolumeUnit::Ounce, None), "0.75 oz");
    assert_eq!(format_volume(1.5, VolumeUnit::Ounce, None), "1.5 oz");
    assert_eq!(format_volume(12.0, VolumeUnit::Drop, None), "12 drops");
    assert_eq!(format_volume(1.25, VolumeUnit::Liter, None), "1.25 L");
}

#[test]
fn format_trims_trailing_zeros() {
    assert_eq!(format_volume(2.0, VolumeUnit::Cup, None), "2 cup");
    assert_eq!(format_volume(1.5, VolumeUnit::Liter, None), "1.5 L");
}

#[test]
fn format_with_explicit_precision() {
    assert_eq!(format_volume(1.23456, VolumeUnit::Ounce, Some(3)), "1.235 oz");
    assert_eq!(format_volume(2.0, VolumeUnit::Ounce, Some(2)), "2 oz");
}
