use super::*;

#[test]
fn from_dark_maps_both_values() {
    assert_eq!(Theme::from_dark(true), Theme::Dark);
    assert_eq!(Theme::from_dark(false), Theme::Light);
}

#[test]
fn opposite_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.opposite(), theme);
        assert_eq!(theme.opposite().opposite(), theme);
    }
}

#[test]
fn display_writes_canonical_token() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn parse_accepts_case_and_whitespace() {
    assert_eq!(" Dark ".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
}

#[test]
fn parse_rejects_unknown_theme() {
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownTheme(ref raw) if raw == "sepia"));
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}

#[test]
fn is_dark_matches_variant() {
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
