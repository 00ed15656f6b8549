use super::*;

#[test]
fn test_parse_key_special() {
    assert!(parse_key("enter").is_ok());
    assert!(parse_key("return").is_ok());
    assert!(parse_key("tab").is_ok());
    assert!(parse_key("space").is_ok());
    assert!(parse_key("backspace").is_ok());
    assert!(parse_key("delete").is_ok());
    assert!(parse_key("esc").is_ok());
}

#[test]
fn test_parse_key_arrows() {
    assert!(parse_key("up").is_ok());
    assert!(parse_key("down").is_ok());
    assert!(parse_key("left").is_ok());
    assert!(parse_key("right").is_ok());
}

#[test]
fn test_parse_key_modifiers() {
    assert!(parse_key("ctrl").is_ok());
    assert!(parse_key("control").is_ok());
    assert!(parse_key("alt").is_ok());
    assert!(parse_key("shift").is_ok());
    assert!(parse_key("meta").is_ok());
    assert!(parse_key("win").is_ok());
    assert!(parse_key("super").is_ok());
}

#[test]
fn test_parse_key_function_keys() {
    for n in 1..=12 {
        let key = format!("f{}", n);
        assert!(parse_key(&key).is_ok(), "Failed for function key: {}", key);
    }
}

#[test]
fn test_parse_key_single_char() {
    assert!(parse_key("a").is_ok());
    assert!(parse_key("Z").is_ok());
    assert!(parse_key("7").is_ok());
    assert!(parse_key("+").is_ok());
}

#[test]
fn test_parse_key_case_insensitive() {
    assert!(parse_key("ENTER").is_ok());
    assert!(parse_key("Ctrl").is_ok());
}

#[test]
fn test_parse_key_invalid() {
    assert!(parse_key("invalid_key_name").is_err());
    assert!(parse_key("nonexistent").is_err());
}

#[test]
fn test_input_error_display() {
    let err = InputError::Failed("operation failed".to_string());
    assert_eq!(err.to_string(), "Input failed: operation failed");

    let err = InputError::InvalidKey("xyz".to_string());
    assert_eq!(err.to_string(), "Invalid key: xyz");
}

// Integration tests that require actual input control
#[test]
#[ignore] // Requires a display
fn test_enigo_driver_new() {
    let driver = EnigoDriver::new();
    assert!(driver.is_ok());
}
