use super::*;

#[test]
fn from_values_applies_defaults() {
    let cfg = ApiConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeout(), Duration::from_secs(10));
    assert!(!cfg.use_mock_data);
}

#[test]
fn from_values_trims_trailing_slash() {
    let cfg = ApiConfig::from_values(Some("https://menu.example.test/api/v1/"), None, None).unwrap();
    assert_eq!(cfg.base_url, "https://menu.example.test/api/v1");
}

#[test]
fn from_values_blank_url_uses_default() {
    let cfg = ApiConfig::from_values(Some("   "), None, None).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ApiConfig::from_values(Some("http://10.0.0.5:9000"), Some("30"), Some("yes")).unwrap();
    assert_eq!(cfg.base_url, "http://10.0.0.5:9000");
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.use_mock_data);
}

#[test]
fn from_values_rejects_bad_timeout() {
    let err = ApiConfig::from_values(None, Some("soon"), None).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: TIMEOUT_VAR, value: "soon".to_owned() });
    assert!(ApiConfig::from_values(None, Some("0"), None).is_err());
}

#[test]
fn from_values_rejects_bad_mock_flag() {
    let err = ApiConfig::from_values(None, None, Some("maybe")).unwrap_err().to_string();
    assert!(err.contains(MOCK_DATA_VAR));
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert_eq!(parse_bool("ON"), Some(true));
    assert_eq!(parse_bool(" 1 "), Some(true));
    assert_eq!(parse_bool("off"), Some(false));
    assert_eq!(parse_bool("nah"), None);
}
