//! Transition edge values.

use serde::{Deserialize, Serialize};

use super::event::Event;
use super::state::State;

/// A single transition rule: one permitted edge in the directed, labeled
/// graph whose vertices are states and whose edges are labeled by events.
///
/// Transitions are plain values; they carry no guards, actions, or payloads.
/// A batch of them is handed to
/// [`TransitionTable::register_batch`](crate::table::TransitionTable::register_batch)
/// to build a table declaratively.
///
/// # Example
///
/// ```rust
/// use trellis::core::Transition;
/// use trellis::{event_enum, state_enum};
///
/// state_enum! {
///     enum Phase { Draft, Submitted }
/// }
///
/// event_enum! {
///     enum Action { Submit }
/// }
///
/// let edge = Transition {
///     from: Phase::Draft,
///     event: Action::Submit,
///     to: Phase::Submitted,
/// };
/// assert_eq!(edge.from, Phase::Draft);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<S: State, E: Event> {
    /// The state the edge originates from
    pub from: S,
    /// The event that triggers the edge
    pub event: E,
    /// The state the edge leads to
    pub to: S,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create a transition edge.
    pub fn new(from: S, event: E, to: S) -> Self {
        Self { from, event, to }
    }
}
