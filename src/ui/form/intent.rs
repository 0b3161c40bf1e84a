use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Replace the raw height text. Keeps any shown error or result.
    EditHeight(String),
    /// Replace the raw weight text. Keeps any shown error or result.
    EditWeight(String),
    /// Validate and, on success, compute. Ignored while a field is empty.
    Calculate,
    /// Clear inputs, error and result.
    Reset,
}

impl Intent for FormIntent {}
