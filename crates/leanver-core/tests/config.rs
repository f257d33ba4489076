use leanver_core::config::{ResolverConfig, UnrankedPolicy};

#[test]
fn test_default_policy_is_last() {
    let config = ResolverConfig::default();
    assert_eq!(config.ranking.unranked, UnrankedPolicy::Last);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = ResolverConfig::from_toml_str("").unwrap();
    assert_eq!(config.ranking.unranked, UnrankedPolicy::Last);
}

#[test]
fn test_strict_rejects_unranked() {
    assert_eq!(
        ResolverConfig::strict().ranking.unranked,
        UnrankedPolicy::Reject
    );
}

#[test]
fn test_parse_reject_policy() {
    let toml = r#"
[ranking]
unranked = "reject"
"#;
    let config = ResolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.ranking.unranked, UnrankedPolicy::Reject);
}

#[test]
fn test_parse_unknown_policy_fails() {
    let toml = r#"
[ranking]
unranked = "first"
"#;
    let err = ResolverConfig::from_toml_str(toml).unwrap_err();
    assert!(
        err.to_string().contains("Configuration error"),
        "got: {err}"
    );
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ResolverConfig::load(&dir.path().join("leanver.toml")).unwrap();
    assert_eq!(config.ranking.unranked, UnrankedPolicy::Last);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leanver.toml");
    std::fs::write(&path, "[ranking]\nunranked = \"reject\"\n").unwrap();

    let config = ResolverConfig::load(&path).unwrap();
    assert_eq!(config.ranking.unranked, UnrankedPolicy::Reject);
}

#[test]
fn test_load_invalid_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leanver.toml");
    std::fs::write(&path, "[ranking\n").unwrap();

    assert!(ResolverConfig::load(&path).is_err());
}

#[test]
fn test_roundtrip_through_toml() {
    let text = toml::to_string(&ResolverConfig::strict()).unwrap();
    assert!(text.contains("unranked = \"reject\""), "got: {text}");
}

#[test]
fn test_load_unreadable_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leanver.toml");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = ResolverConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("I/O error"), "got: {err}");
}
