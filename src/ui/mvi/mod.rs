//! Model-View-Intent primitives.
//!
//! ```text
//! FormIntent ──→ FormReducer ──→ FormState ──→ render ──→ FormView
//!     ↑                                                      │
//!     └──────────────────── key presses ─────────────────────┘
//! ```
//!
//! - **State**: value replaced wholesale on every transition
//! - **Intent**: something the user did
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
