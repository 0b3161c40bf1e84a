use crate::bmi::{BmiResult, ValidationError};
use crate::ui::mvi::UiState;

/// Text exactly as typed, possibly empty or non-numeric.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInputs {
    pub height: String,
    pub weight: String,
}

/// What the last calculate (or reset) left behind.
///
/// An error and a result can never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Error(ValidationError),
    Computed(BmiResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Error,
    Computed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub inputs: RawInputs,
    pub outcome: Outcome,
}

impl UiState for FormState {}

impl FormState {
    pub fn phase(&self) -> FormPhase {
        match self.outcome {
            Outcome::Idle => FormPhase::Idle,
            Outcome::Error(_) => FormPhase::Error,
            Outcome::Computed(_) => FormPhase::Computed,
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self.outcome {
            Outcome::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&BmiResult> {
        match &self.outcome {
            Outcome::Computed(result) => Some(result),
            _ => None,
        }
    }

    /// The calculate trigger is disabled while either field is empty.
    pub fn can_calculate(&self) -> bool {
        !self.inputs.height.is_empty() && !self.inputs.weight.is_empty()
    }
}
