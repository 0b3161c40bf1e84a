/// Marker trait for user actions fed into a reducer.
pub trait Intent: Send + 'static {}
