//! The transition table itself.

use std::collections::HashMap;

use crate::core::{Event, State, Transition};
use crate::table::error::{PathError, TransitionError};

/// A generic transition table: the set of permitted edges of a directed,
/// labeled graph whose vertices are states and whose edges are labeled by
/// events.
///
/// The table is the whole engine. It holds no notion of a "current state" for
/// any entity — [`transition`](Self::transition) is a pure function from
/// (state, event) to (state | error), and the caller owns persisting the
/// returned state wherever its domain keeps it.
///
/// Internally the edges are indexed as a map of maps
/// (state → (event → state)) for O(1) average lookup. A given (from, event)
/// pair maps to exactly one destination; re-registering the same pair silently
/// overwrites the previous destination (last write wins). This is intentional
/// and documented behavior, useful for redefinition in tests.
///
/// # Concurrency
///
/// The table does no locking and spawns nothing. All queries take `&self`, so
/// a fully constructed table can be shared freely (for example behind an
/// `Arc`). Interleaving registration with concurrent reads requires external
/// synchronization from the caller.
///
/// # Example
///
/// ```rust
/// use trellis::table::TransitionTable;
/// use trellis::{event_enum, state_enum};
///
/// state_enum! {
///     enum OrderState { Pending, Processing, Shipped }
/// }
///
/// event_enum! {
///     enum OrderEvent { Confirm, Ship }
/// }
///
/// let mut table = TransitionTable::new();
/// table.register(OrderState::Pending, OrderEvent::Confirm, OrderState::Processing);
/// table.register(OrderState::Processing, OrderEvent::Ship, OrderState::Shipped);
///
/// assert!(table.can_transition(&OrderState::Pending, &OrderEvent::Confirm));
/// let next = table.transition(&OrderState::Pending, &OrderEvent::Confirm).unwrap();
/// assert_eq!(next, OrderState::Processing);
/// assert!(table.is_terminal(&OrderState::Shipped));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    transitions: HashMap<S, HashMap<E, S>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Register an edge for (from, event) leading to `to`.
    ///
    /// Always succeeds. If the (from, event) pair already has a destination,
    /// it is silently overwritten — last write wins.
    pub fn register(&mut self, from: S, event: E, to: S) {
        self.transitions.entry(from).or_default().insert(event, to);
    }

    /// Register a batch of edges in sequence order.
    ///
    /// Later entries overwrite earlier ones when they share a (from, event)
    /// key. There are no partial-failure semantics because each individual
    /// registration is infallible.
    pub fn register_batch(&mut self, edges: impl IntoIterator<Item = Transition<S, E>>) {
        for edge in edges {
            self.register(edge.from, edge.event, edge.to);
        }
    }

    /// Check whether an edge exists for this exact (from, event) pair.
    ///
    /// Pure query. An unknown `from` state yields `false`, not an error.
    pub fn can_transition(&self, from: &S, event: &E) -> bool {
        self.transitions
            .get(from)
            .is_some_and(|edges| edges.contains_key(event))
    }

    /// Look up the destination for (from, event).
    ///
    /// On a miss — whether `from` has no outgoing edges at all or none match
    /// `event` — fails with [`TransitionError::InvalidTransition`]. The table
    /// itself is never mutated; the caller persists the returned state as the
    /// new current state of whatever entity owns it.
    pub fn transition(&self, from: &S, event: &E) -> Result<S, TransitionError<S, E>> {
        self.peek_next_state(from, event)
            .ok_or_else(|| TransitionError::InvalidTransition {
                from: from.clone(),
                event: event.clone(),
            })
    }

    /// Same lookup as [`transition`](Self::transition), returning `None`
    /// instead of an error on a miss.
    pub fn peek_next_state(&self, from: &S, event: &E) -> Option<S> {
        self.transitions
            .get(from)
            .and_then(|edges| edges.get(event))
            .cloned()
    }

    /// All events that have a registered edge from `from`.
    ///
    /// Order is unspecified; callers needing reproducible order should sort
    /// by [`Event::name`]. Empty if `from` is terminal or unknown.
    pub fn valid_events(&self, from: &S) -> Vec<E> {
        self.transitions
            .get(from)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Check whether `state` has zero registered outgoing edges.
    ///
    /// A state that only ever appears as a destination is terminal by this
    /// definition, and so is a state the table has never seen at all. Callers
    /// that need "reachable and terminal" should separately check membership
    /// via [`all_states`](Self::all_states).
    pub fn is_terminal(&self, state: &S) -> bool {
        self.transitions
            .get(state)
            .is_none_or(|edges| edges.is_empty())
    }

    /// Every state appearing as a source or destination of a registered edge.
    ///
    /// Deduplicated by equality, unspecified order. This is a pure derivation
    /// from the edge set, not an external schema: states the caller's domain
    /// considers valid but never registered are absent.
    pub fn all_states(&self) -> Vec<S> {
        let mut states = Vec::with_capacity(self.transitions.len());
        let mut seen = std::collections::HashSet::new();

        for (from, edges) in &self.transitions {
            if seen.insert(from.clone()) {
                states.push(from.clone());
            }
            for to in edges.values() {
                if seen.insert(to.clone()) {
                    states.push(to.clone());
                }
            }
        }

        states
    }

    /// A defensive copy of the outgoing edges of `from`.
    ///
    /// Empty map if there are none. Mutating the returned map does not affect
    /// the table.
    pub fn transitions_from(&self, from: &S) -> HashMap<E, S> {
        self.transitions.get(from).cloned().unwrap_or_default()
    }

    /// Simulate applying each event in sequence starting from `start`.
    ///
    /// A strict left-fold over the event sequence with
    /// [`transition`](Self::transition) as the step function: the state each
    /// step returns feeds the next step. Fails at the first event with no
    /// valid edge from the then-current state, reporting the 1-based step
    /// index along with the state and event at the failure. An empty sequence
    /// returns `start` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis::table::TransitionTable;
    /// use trellis::{event_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Phase { One, Two, Three }
    /// }
    ///
    /// event_enum! {
    ///     enum Step { Advance, Finish }
    /// }
    ///
    /// let mut table = TransitionTable::new();
    /// table.register(Phase::One, Step::Advance, Phase::Two);
    /// table.register(Phase::Two, Step::Finish, Phase::Three);
    ///
    /// let end = table.validate_path(&Phase::One, &[Step::Advance, Step::Finish]);
    /// assert_eq!(end.unwrap(), Phase::Three);
    ///
    /// let err = table.validate_path(&Phase::One, &[Step::Finish]).unwrap_err();
    /// assert_eq!(err.step, 1);
    /// ```
    pub fn validate_path(&self, start: &S, events: &[E]) -> Result<S, PathError<S, E>> {
        let mut current = start.clone();
        for (i, event) in events.iter().enumerate() {
            match self.transition(&current, event) {
                Ok(next) => current = next,
                Err(TransitionError::InvalidTransition { from, event }) => {
                    return Err(PathError {
                        step: i + 1,
                        state: from,
                        event,
                    });
                }
            }
        }
        Ok(current)
    }

    /// Number of registered edges.
    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    /// Check whether no edges have been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
