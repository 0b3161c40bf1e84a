use super::intent::Intent;
use super::state::UiState;

/// The only place where UI state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not have side effects: same inputs, same output.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
