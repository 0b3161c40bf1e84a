/// Marker trait for UI state values.
///
/// `Default` is the initial state; `PartialEq` lets callers skip redraws
/// when a transition changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
