use leanver_util::errors::LeanverError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = LeanverError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = LeanverError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad syntax");
}

#[test]
fn test_unranked_error_display() {
    let err = LeanverError::Unranked {
        range: "~*".to_string(),
    };
    assert_eq!(err.to_string(), "Range `~*` has no specificity rank");
}

#[test]
fn test_unranked_error_has_help() {
    use miette::Diagnostic;

    let err = LeanverError::Unranked {
        range: ">>1".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("ranking.unranked"), "got: {help}");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: LeanverError = io_err.into();
    assert!(matches!(err, LeanverError::Io(_)));
}

#[test]
fn test_into_miette_report() {
    let err = LeanverError::Config {
        message: "boom".to_string(),
    };
    let report: miette::Report = err.into();
    assert_eq!(report.to_string(), "Configuration error: boom");
}
