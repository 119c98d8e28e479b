//! Core transition-table types.
//!
//! This module contains the vocabulary contracts and edge values:
//! - State definitions via the `State` trait
//! - Event definitions via the `Event` trait
//! - `Transition` edge values for declarative table construction
//!
//! All logic in this module is pure (no side effects).

mod event;
mod state;
mod transition;

pub use event::Event;
pub use state::State;
pub use transition::Transition;
