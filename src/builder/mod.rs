//! Builder API for ergonomic table construction.
//!
//! Registration on [`TransitionTable`](crate::table::TransitionTable) is
//! infallible, so unlike most builders this one has no failure mode:
//! `build` always yields a table.

use crate::core::{Event, State, Transition};
use crate::table::TransitionTable;

/// Builder for constructing transition tables with a fluent API.
///
/// Edges are applied in the order they were added, so a later `.edge()` for
/// the same (from, event) key overwrites an earlier one, matching
/// [`TransitionTable::register`](crate::table::TransitionTable::register)
/// semantics.
///
/// # Example
///
/// ```rust
/// use trellis::builder::TransitionTableBuilder;
/// use trellis::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Red, Green, Yellow }
/// }
///
/// event_enum! {
///     enum Tick { Next }
/// }
///
/// let table = TransitionTableBuilder::new()
///     .edge(Light::Red, Tick::Next, Light::Green)
///     .edge(Light::Green, Tick::Next, Light::Yellow)
///     .edge(Light::Yellow, Tick::Next, Light::Red)
///     .build();
///
/// assert_eq!(table.len(), 3);
/// ```
pub struct TransitionTableBuilder<S: State, E: Event> {
    edges: Vec<Transition<S, E>>,
}

impl<S: State, E: Event> TransitionTableBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add a single edge.
    pub fn edge(mut self, from: S, event: E, to: S) -> Self {
        self.edges.push(Transition::new(from, event, to));
        self
    }

    /// Add multiple pre-built edges at once.
    pub fn edges(mut self, edges: impl IntoIterator<Item = Transition<S, E>>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Build the table.
    pub fn build(self) -> TransitionTable<S, E> {
        let mut table = TransitionTable::new();
        table.register_batch(self.edges);
        table
    }
}

impl<S: State, E: Event> Default for TransitionTableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
