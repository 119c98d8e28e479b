//! Core State trait for transition-table states.
//!
//! Any caller-defined value can act as a state as long as it is
//! equality-comparable, hashable for the table index, and has a display form.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for transition-table states.
///
/// States are opaque values to the engine: no structure is imposed beyond
/// equality, hashing, and a display form. A state's meaning (including
/// whether it is terminal) is derived entirely from the registered edges,
/// never from the type itself.
///
/// # Required Traits
///
/// - `Clone`: states are returned by value from lookups
/// - `Eq` + `Hash`: states key the table's index
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use trellis::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum OrderState {
///     Pending,
///     Processing,
///     Shipped,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Processing => "Processing",
///             Self::Shipped => "Shipped",
///         }
///     }
/// }
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display and error messages.
    ///
    /// Returns a string reference for zero-cost naming.
    fn name(&self) -> &str;
}
