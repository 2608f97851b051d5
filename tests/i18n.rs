//! 언어 결정/번역 폴백 테스트.
use pour_cost_toolbox::i18n::{keys, resolve_language, Translator};

#[test]
fn builtin_tables_per_language() {
    let ko = Translator::new("ko");
    assert_eq!(ko.t(keys::MAIN_MENU_SETTINGS), "5) 설정");
    let en = Translator::new("en");
    assert_eq!(en.t(keys::MAIN_MENU_SETTINGS), "5) Settings");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let tr = Translator::new("fr");
    assert_eq!(tr.language_code(), "en");
    assert_eq!(tr.t(keys::TIER_EXCELLENT), "Excellent");
}

#[test]
fn cli_flag_beats_config_language() {
    assert_eq!(resolve_language("ko", Some("en")), "ko");
    assert_eq!(resolve_language("auto", Some("en")), "en");
    assert_eq!(resolve_language("en-uk", None), "en-us");
}

#[test]
fn bundled_pack_provides_overrides() {
    let tr = Translator::new_with_pack("ko", None);
    assert_eq!(tr.t(keys::TIER_EXCELLENT), "최상");
    assert!(tr.lookup(keys::MAIN_MENU_TITLE).is_some());
}
