/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use email_address::EmailAddress;
use std::fmt;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

pub fn normalize_email(email: &str) -> String {
    // Only the domain part is case insensitive.
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.trim().to_string(),
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("This field may not be blank.".to_string());
    }

    if !EmailAddress::is_valid(email.trim()) {
        return Err("Enter a valid email address.".to_string());
    }

    Ok(())
}

pub fn validate_text(value: &str, max_length: usize, required: bool) -> Result<(), String> {
    if required && value.trim().is_empty() {
        return Err("This field may not be blank.".to_string());
    }

    if value.chars().count() > max_length {
        return Err(format!(
            "Ensure this field has no more than {} characters.",
            max_length
        ));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("This field may not be blank.".to_string());
    }

    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password cannot exceed {} characters",
            MAX_PASSWORD_LENGTH
        ));
    }

    Ok(())
}

pub fn validate_valuation(valuation: f64) -> Result<(), String> {
    if !valuation.is_finite() || valuation < 0.0 {
        return Err("Valuation must be a non-negative number.".to_string());
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects every failed field check of one request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputError {
    pub errors: Vec<FieldError>,
}

impl InputError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, field: &str, result: Result<(), String>) -> &mut Self {
        if let Err(message) = result {
            self.errors.push(FieldError {
                field: field.to_string(),
                message,
            });
        }

        self
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn finish(self) -> Result<(), InputError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for InputError {}
