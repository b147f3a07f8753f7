//! Validation Framework
//!
//! Request payloads accepted by the services, and the rules that turn them
//! into domain values. Field checks use the `validator` derive; failures are
//! collected into a [`ValidationResult`] and surface as
//! [`ApplicationError::Unprocessable`].

mod question;
mod quiz;

pub use question::*;
pub use quiz::*;

use crate::ApplicationError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Validation result containing all errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether validation passed
    pub valid: bool,
    /// Field-level errors, keyed by field name
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            field_errors: BTreeMap::new(),
        }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Convert to ApplicationError if invalid
    pub fn to_error(&self) -> Option<ApplicationError> {
        if self.valid {
            return None;
        }

        let messages: Vec<String> = self
            .field_errors
            .iter()
            .flat_map(|(field, errors)| errors.iter().map(move |e| format!("{}: {}", field, e)))
            .collect();

        Some(ApplicationError::Unprocessable(messages.join("; ")))
    }

    /// Ensure validation passed, returning error if not
    pub fn ensure_valid(&self) -> Result<(), ApplicationError> {
        match self.to_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Extension to convert validator errors to our format
pub trait ValidatorExt {
    fn to_validation_result(&self) -> ValidationResult;
}

impl<T: Validate> ValidatorExt for T {
    fn to_validation_result(&self) -> ValidationResult {
        match self.validate() {
            Ok(_) => ValidationResult::success(),
            Err(errors) => {
                let mut result = ValidationResult::success();

                for (field, field_errors) in errors.field_errors() {
                    for error in field_errors {
                        let message = error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string());
                        result.add_field_error(field.to_string(), message);
                    }
                }

                result
            }
        }
    }
}

/// Integer carried either as a JSON number or a numeric string
///
/// Browser forms submit select values as strings (`"3"`), so numeric fields
/// accept both spellings.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Deserialize an optional integer-like field, accepting numeric strings.
pub(crate) fn flexible_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<i32>,
{
    let raw: Option<IntOrString> = Option::deserialize(deserializer)?;
    let value = match raw {
        None => return Ok(None),
        Some(IntOrString::Int(i)) => i32::try_from(i)
            .map_err(|_| de::Error::custom(format!("integer out of range: {}", i)))?,
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {:?}", s)))?,
    };
    Ok(Some(T::from(value)))
}
