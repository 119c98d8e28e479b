//! Errors surfaced by table queries.
//!
//! Both kinds describe "no such edge"; they differ by caller intent.
//! Errors are always returned synchronously to the immediate caller and are
//! never fatal to the table — how to handle them belongs to the domain layer.

use thiserror::Error;

use crate::core::{Event, State};

/// A single-step lookup found no registered edge.
///
/// Returned by [`TransitionTable::transition`](crate::table::TransitionTable::transition)
/// when no edge matches the (from, event) pair — either the source state has
/// no outgoing edges at all, or none of them is labeled with the event.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransitionError<S: State, E: Event> {
    /// No edge registered for this (from, event) pair.
    #[error("invalid transition: cannot process event '{}' from state '{}'", .event.name(), .from.name())]
    InvalidTransition {
        /// The state the lookup started from
        from: S,
        /// The event that had no matching edge
        event: E,
    },
}

/// A multi-step path validation failed at a specific step.
///
/// Returned by [`TransitionTable::validate_path`](crate::table::TransitionTable::validate_path),
/// identifying exactly where in the proposed sequence the first invalid step
/// occurs. Only the first failure is reported; no alternate paths are tried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid path at step {step}: cannot process event '{}' from state '{}'", .event.name(), .state.name())]
pub struct PathError<S: State, E: Event> {
    /// 1-based index of the failing step in the event sequence
    pub step: usize,
    /// The state the walk had reached when the step failed
    pub state: S,
    /// The event that had no matching edge
    pub event: E,
}
