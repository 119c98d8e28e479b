//! Core Event trait for transition-table events.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for transition-table events.
///
/// Events carry the same contract as states: opaque, equality-comparable,
/// hashable values with a display form. An event has no payload; it is
/// purely a label on an edge of the transition graph.
///
/// # Example
///
/// ```rust
/// use trellis::core::Event;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum OrderEvent {
///     Confirm,
///     Ship,
///     Cancel,
/// }
///
/// impl Event for OrderEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Confirm => "Confirm",
///             Self::Ship => "Ship",
///             Self::Cancel => "Cancel",
///         }
///     }
/// }
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display and error messages.
    fn name(&self) -> &str;
}
