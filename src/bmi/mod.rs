//! BMI core: input validation and the calculation engine.
//!
//! Both halves are pure functions. The form reducer in
//! [`crate::ui::form`] composes them:
//!
//! ```text
//! RawInputs ──→ validate ──→ ValidInputs ──→ compute ──→ BmiResult
//!                  │
//!                  └──→ ValidationError
//! ```

mod engine;
mod validator;

pub use engine::{compute, round1, BmiResult, Category, SCALE_MAX};
pub use validator::{validate, ValidInputs, ValidationError, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
