use serde::Serialize;

use crate::bmi::validator::ValidInputs;
use crate::locale::Locale;

/// Upper end of the display scale. The marker sits at `value / SCALE_MAX`.
pub const SCALE_MAX: f64 = 40.0;

const UNDERWEIGHT_BELOW: f64 = 18.5;
// Upper bounds of Normal and Overweight are 24.9 and 29.9, not 25 and 30.
const NORMAL_BELOW: f64 = 24.9;
const OVERWEIGHT_BELOW: f64 = 29.9;

/// Health band a BMI value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Category::Underweight
        } else if bmi < NORMAL_BELOW {
            Category::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        locale.category_label(self)
    }

    pub fn tip(self, locale: Locale) -> &'static str {
        locale.category_tip(self)
    }
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place.
    pub value: f64,
    pub category: Category,
}

impl BmiResult {
    /// Marker position on the display scale, in `0.0..=1.0`.
    pub fn scale_position(&self) -> f64 {
        (self.value / SCALE_MAX).min(1.0)
    }

    pub fn tip(&self, locale: Locale) -> &'static str {
        self.category.tip(locale)
    }
}

/// Computes and classifies BMI for validated inputs.
pub fn compute(inputs: ValidInputs) -> BmiResult {
    let height_m = inputs.height_cm / 100.0;
    let value = round1(inputs.weight_kg / (height_m * height_m));
    BmiResult {
        value,
        category: Category::classify(value),
    }
}

/// Rounds to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
