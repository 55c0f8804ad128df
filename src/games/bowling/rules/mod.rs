//! Game rules for bowling.
//!
//! Pure functions over a frame's balls. Rules are kept apart from the
//! frame state machine so contracts and invariants can reuse them.

pub mod completion;
pub mod rack;

pub use completion::{classify, is_complete, max_attempts};
pub use rack::{on_fresh_rack, standing_pins};
