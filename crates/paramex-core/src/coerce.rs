//! # Coercion Table
//!
//! String → declared type conversions. Each parser returns a [`ParseDiagnostic`] on
//! failure; the engine wraps it into [`BindError::Unmarshal`](crate::BindError::Unmarshal)
//! together with the raw value and the target type name.

use crate::error::ParseDiagnostic;
use uuid::Uuid;

/// Length of the canonical `8-4-4-4-12` hyphenated UUID form.
const UUID_TEXT_LEN: usize = 36;

/// Accepts the canonical true/false tokens: `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Result<bool, ParseDiagnostic> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseDiagnostic::InvalidBool),
    }
}

pub fn parse_i32(raw: &str) -> Result<i32, ParseDiagnostic> {
    Ok(raw.parse()?)
}

pub fn parse_isize(raw: &str) -> Result<isize, ParseDiagnostic> {
    Ok(raw.parse()?)
}

pub fn parse_i64(raw: &str) -> Result<i64, ParseDiagnostic> {
    Ok(raw.parse()?)
}

pub fn parse_f32(raw: &str) -> Result<f32, ParseDiagnostic> {
    Ok(raw.parse()?)
}

pub fn parse_f64(raw: &str) -> Result<f64, ParseDiagnostic> {
    Ok(raw.parse()?)
}

/// Only the 36 character hyphenated form is accepted.
pub fn parse_uuid(raw: &str) -> Result<Uuid, ParseDiagnostic> {
    if raw.len() != UUID_TEXT_LEN {
        return Err(ParseDiagnostic::UuidLength(raw.len()));
    }
    Ok(Uuid::try_parse(raw)?)
}
