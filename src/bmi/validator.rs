use std::ops::RangeInclusive;
use thiserror::Error;

use crate::locale::Locale;

/// Accepted height in centimeters (inclusive).
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;
/// Accepted weight in kilograms (inclusive).
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;

/// Reasons a calculation request is refused.
///
/// The `Display` text is the fixed user-facing message shown in the
/// default (Russian) locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Рост должен быть от 100 до 250 см")]
    HeightOutOfRange,

    #[error("Вес должен быть от 30 до 300 кг")]
    WeightOutOfRange,
}

impl ValidationError {
    /// Short machine-oriented reason, used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::HeightOutOfRange => "height out of range",
            ValidationError::WeightOutOfRange => "weight out of range",
        }
    }

    /// User-facing message in the given locale.
    pub fn message(&self, locale: Locale) -> &'static str {
        locale.validation_message(*self)
    }
}

/// Height and weight that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInputs {
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Validates raw height and weight text.
///
/// Height is checked first; weight is only looked at once height passed.
/// Text that does not parse as a finite decimal number fails the range
/// check of its field.
pub fn validate(height: &str, weight: &str) -> Result<ValidInputs, ValidationError> {
    let height_cm =
        parse_in_range(height, &HEIGHT_RANGE_CM).ok_or(ValidationError::HeightOutOfRange)?;
    let weight_kg =
        parse_in_range(weight, &WEIGHT_RANGE_KG).ok_or(ValidationError::WeightOutOfRange)?;
    Ok(ValidInputs {
        height_cm,
        weight_kg,
    })
}

fn parse_in_range(text: &str, range: &RangeInclusive<f64>) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    range.contains(&value).then_some(value)
}
