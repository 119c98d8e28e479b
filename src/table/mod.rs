//! The transition-table engine.
//!
//! A [`TransitionTable`] stores permitted (state, event) → state edges and
//! answers queries about them: single-step lookup, reachable states,
//! terminal-state detection, and multi-step path validation. It has no
//! execution state of its own; all state belongs to the caller's domain
//! entities.

pub mod error;
pub mod machine;

pub use error::{PathError, TransitionError};
pub use machine::TransitionTable;
