//! Input validation for the presentation layer. The managers themselves
//! accept whatever they are given; screens are expected to run these checks
//! before dispatching a command.

use time::Date;
use time::macros::format_description;

use crate::constants::*;

pub fn validate_field_length(
    value: &str,
    field_name: &str,
    max_length: usize,
) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }
    if value.len() > max_length {
        return Err(format!(
            "{} must be less than {} characters",
            field_name, max_length
        ));
    }
    Ok(())
}

pub fn validate_description(value: &str) -> Result<(), String> {
    validate_field_length(value, "Description", MAX_DESCRIPTION_LENGTH)
}

pub fn validate_name(value: &str) -> Result<(), String> {
    validate_field_length(value, "Name", MAX_NAME_LENGTH)
}

/// Parses a user-typed amount, rejecting non-numbers and anything not
/// strictly positive.
pub fn validate_amount(raw: &str) -> Result<f64, String> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Amount must be a number".to_string())?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err("Amount must be greater than zero".to_string());
    }
    Ok(parsed)
}

/// Parses a `YYYY-MM-DD` date as typed into the date field.
pub fn validate_date(raw: &str) -> Result<Date, String> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format).map_err(|_| "Date must be in YYYY-MM-DD format".to_string())
}

/// Shallow shape check only; the directory is a local mock, so there is no
/// point being stricter than "local@domain.tld".
pub fn validate_email(email: &str) -> Result<(), String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Email is not valid".to_string()),
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}
