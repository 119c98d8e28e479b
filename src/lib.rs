//! Trellis: a generic transition-table state machine engine
//!
//! Trellis records which (state, event) pairs are permitted and what state
//! each transition leads to, then answers queries about transition validity,
//! reachable states, and multi-step path validation. The table holds no
//! current state for any entity — it is a static, queryable graph, and every
//! lookup is a pure function. Persisting the state an entity is in belongs
//! entirely to the caller.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: caller-defined vocabularies via the [`core::State`]
//!   and [`core::Event`] traits (or the [`state_enum!`] / [`event_enum!`] macros)
//! - **Transition**: a registered rule (from, event) → to
//! - **TransitionTable**: the indexed edge set, with single-step lookup and
//!   multi-step path validation derived from it
//!
//! # Example
//!
//! ```rust
//! use trellis::table::TransitionTable;
//! use trellis::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum OrderState {
//!         Pending,
//!         Processing,
//!         Shipped,
//!         Delivered,
//!     }
//! }
//!
//! event_enum! {
//!     enum OrderEvent {
//!         Confirm,
//!         Ship,
//!         Deliver,
//!     }
//! }
//!
//! let mut table = TransitionTable::new();
//! table.register(OrderState::Pending, OrderEvent::Confirm, OrderState::Processing);
//! table.register(OrderState::Processing, OrderEvent::Ship, OrderState::Shipped);
//! table.register(OrderState::Shipped, OrderEvent::Deliver, OrderState::Delivered);
//!
//! let next = table.transition(&OrderState::Pending, &OrderEvent::Confirm).unwrap();
//! assert_eq!(next, OrderState::Processing);
//!
//! let end = table
//!     .validate_path(
//!         &OrderState::Pending,
//!         &[OrderEvent::Confirm, OrderEvent::Ship, OrderEvent::Deliver],
//!     )
//!     .unwrap();
//! assert_eq!(end, OrderState::Delivered);
//! assert!(table.is_terminal(&OrderState::Delivered));
//! ```

pub mod builder;
pub mod core;
pub mod macros;
pub mod table;

// Re-export commonly used types
pub use builder::TransitionTableBuilder;
pub use core::{Event, State, Transition};
pub use table::{PathError, TransitionError, TransitionTable};
