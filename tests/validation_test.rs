/*!
 * Validation Helper Unit Tests
 *
 * Covers the presentation-side input checks in `utils` and the environment
 * configuration in `config`. The managers trust their inputs, so these
 * helpers are the only line of defense against malformed form values.
 */

use my_finance_client::config::{Config, ConfigError};
use my_finance_client::utils::{
    validate_amount, validate_date, validate_description, validate_email, validate_field_length,
    validate_name, validate_password,
};
use time::macros::date;

#[test]
fn field_length_rejects_empty_and_oversized_values() {
    assert!(validate_field_length("", "Field", 10).is_err());
    assert!(validate_field_length("   ", "Field", 10).is_err());
    assert!(validate_field_length("12345678901", "Field", 10).is_err());
    assert!(validate_field_length("ok", "Field", 10).is_ok());
}

#[test]
fn description_and_name_use_their_limits() {
    assert!(validate_description(&"x".repeat(255)).is_ok());
    assert!(validate_description(&"x".repeat(256)).is_err());
    assert!(validate_name(&"x".repeat(50)).is_ok());
    assert!(validate_name(&"x".repeat(51)).is_err());
}

#[test]
fn amount_must_be_a_positive_number() {
    assert_eq!(validate_amount("125.50"), Ok(125.50));
    assert_eq!(validate_amount("  10 "), Ok(10.0));
    assert!(validate_amount("abc").is_err());
    assert!(validate_amount("0").is_err());
    assert!(validate_amount("-5").is_err());
    assert!(validate_amount("inf").is_err());
    assert!(validate_amount("NaN").is_err());
}

#[test]
fn date_parses_iso_calendar_dates_only() {
    assert_eq!(validate_date("2024-12-01"), Ok(date!(2024 - 12 - 01)));
    assert_eq!(validate_date(" 2024-12-01 "), Ok(date!(2024 - 12 - 01)));
    assert!(validate_date("01/12/2024").is_err());
    assert!(validate_date("2024-13-01").is_err());
    assert!(validate_date("yesterday").is_err());
}

#[test]
fn email_requires_local_part_and_dotted_domain() {
    assert!(validate_email("ana@example.com").is_ok());
    assert!(validate_email("").is_err());
    assert!(validate_email("no-at-sign").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("ana@localhost").is_err());
}

#[test]
fn password_has_a_minimum_length() {
    assert!(validate_password("123").is_ok());
    assert!(validate_password("12").is_err());
}

#[test]
fn config_defaults_and_rejects_empty_path() {
    let config = Config::from_data_path(None).expect("Default path should be accepted");
    assert_eq!(config.data_path, "data");

    let config =
        Config::from_data_path(Some("/tmp/finance".to_string())).expect("Path should be accepted");
    assert_eq!(config.data_path, "/tmp/finance");

    let err = Config::from_data_path(Some("   ".to_string())).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyDataPath));
}
