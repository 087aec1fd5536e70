use mcp_scaffold::AppError;

#[test]
fn display_prefixes_variant() {
    assert_eq!(
        AppError::Config("bad transport".into()).to_string(),
        "config: bad transport"
    );
    assert_eq!(
        AppError::DuplicateName("echo".into()).to_string(),
        "duplicate name: echo"
    );
    assert_eq!(
        AppError::NotFound("missing".into()).to_string(),
        "not found: missing"
    );
    assert_eq!(
        AppError::Validation("message required".into()).to_string(),
        "validation: message required"
    );
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");

    let err: AppError = io.into();

    assert!(matches!(err, AppError::Io(_)));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn toml_error_converts_to_config() {
    let toml_err = toml::from_str::<toml::Value>("not [ valid").expect_err("invalid toml");

    let err: AppError = toml_err.into();

    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn not_found_maps_to_invalid_params() {
    let err: rmcp::ErrorData = AppError::NotFound("no tool named 'x'".into()).into();

    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("no tool named 'x'"));
}

#[test]
fn validation_maps_to_invalid_params() {
    let err: rmcp::ErrorData = AppError::Validation("bad input".into()).into();

    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
}

#[test]
fn config_maps_to_internal_error() {
    let err: rmcp::ErrorData = AppError::Config("oops".into()).into();

    assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
}
