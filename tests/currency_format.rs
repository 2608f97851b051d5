//! 통화 서식/파싱/환산 테스트.
use pour_cost_toolbox::currency::{
    convert, find_currency, format, lookup, parse, symbol_for, FormatOptions, SeparatorStyle,
};

#[test]
fn per_currency_default_decimals() {
    let opts = FormatOptions::default();
    assert_eq!(format(12.3, "JPY", &opts), "¥12");
    assert_eq!(format(12.3, "USD", &opts), "$12.30");
    assert_eq!(format(12.3, "KRW", &opts), "₩12");
}

#[test]
fn thousands_grouping_and_sign() {
    let opts = FormatOptions::default();
    assert_eq!(format(1234567.89, "USD", &opts), "$1,234,567.89");
    assert_eq!(format(-5.5, "EUR", &opts), "-€5.50");
}

#[test]
fn separator_styles() {
    let opts = FormatOptions {
        separator: SeparatorStyle::DotComma,
        ..FormatOptions::default()
    };
    assert_eq!(format(1234.5, "EUR", &opts), "€1.234,50");
    let opts = FormatOptions {
        separator: SeparatorStyle::SpaceComma,
        ..FormatOptions::default()
    };
    assert_eq!(format(1234.5, "EUR", &opts), "€1 234,50");
}

#[test]
fn compact_notation() {
    let opts = FormatOptions {
        compact: true,
        ..FormatOptions::default()
    };
    assert_eq!(format(12_000.0, "USD", &opts), "$12K");
    assert_eq!(format(1_500_000.0, "USD", &opts), "$1.5M");
    assert_eq!(format(2_300_000_000.0, "USD", &opts), "$2.3B");
    // 1,000 미만은 축약 없이 일반 서식
    assert_eq!(format(999.0, "USD", &opts), "$999.00");
}

#[test]
fn unknown_code_falls_back_to_code_prefix() {
    assert_eq!(symbol_for("XYZ"), "XYZ ");
    let opts = FormatOptions::default();
    assert_eq!(format(3.5, "XYZ", &opts), "XYZ 3.50");
}

#[test]
fn strict_lookup() {
    assert_eq!(lookup("JPY").expect("jpy").decimals, 0);
    assert!(lookup("ZZZ").is_err());
    assert!(find_currency("usd").is_some());
}

#[test]
fn parse_symbol_prefixed() {
    let parsed = parse("$12.34").expect("parse");
    assert!((parsed.amount - 12.34).abs() < 1e-12);
    assert_eq!(parsed.code.as_deref(), Some("USD"));

    let parsed = parse("-₩5000").expect("parse");
    assert!((parsed.amount + 5000.0).abs() < 1e-12);
    assert_eq!(parsed.code.as_deref(), Some("KRW"));

    // 가장 긴 기호 일치: CA$는 $보다 우선한다.
    let parsed = parse("CA$9.99").expect("parse");
    assert_eq!(parsed.code.as_deref(), Some("CAD"));
}

#[test]
fn parse_code_prefixed_and_suffixed() {
    let parsed = parse("USD 12.34").expect("parse");
    assert_eq!(parsed.code.as_deref(), Some("USD"));
    let parsed = parse("12.34 eur").expect("parse");
    assert_eq!(parsed.code.as_deref(), Some("EUR"));
    assert!((parsed.amount - 12.34).abs() < 1e-12);
}

#[test]
fn parse_plain_number_with_thousands_separators() {
    let parsed = parse("1,234.56").expect("parse");
    assert!((parsed.amount - 1234.56).abs() < 1e-12);
    assert_eq!(parsed.code, None);
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse("").is_none());
    assert!(parse("   ").is_none());
    assert!(parse("abcd").is_none());
    assert!(parse("$").is_none());
}

#[test]
fn convert_is_identity_for_same_code() {
    let v = 12.345678;
    assert_eq!(convert(v, "USD", "usd", None).expect("convert"), v);
}

#[test]
fn convert_with_explicit_rate() {
    let out = convert(10.0, "USD", "EUR", Some(0.5)).expect("convert");
    assert!((out - 5.0).abs() < 1e-12);
}

#[test]
fn convert_via_static_table() {
    let krw = convert(10.0, "USD", "KRW", None).expect("convert");
    assert!((krw - 13300.0).abs() < 1e-6);
    let usd = convert(1330.0, "KRW", "USD", None).expect("convert");
    assert!((usd - 1.0).abs() < 1e-9);
}

#[test]
fn convert_unknown_code_fails_without_rate() {
    assert!(convert(1.0, "USD", "ZZZ", None).is_err());
    assert!(convert(1.0, "ZZZ", "USD", Some(2.0)).is_ok());
}
