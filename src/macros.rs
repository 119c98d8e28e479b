//! Macros for declaring state and event vocabularies.

/// Generate a `State` trait implementation for a simple enum.
///
/// The generated enum derives `Clone`, `PartialEq`, `Eq`, `Hash`, `Debug`,
/// and the serde traits, and names each variant after its identifier.
/// Terminal-ness is not declared here — it is derived from the table's edge
/// set via [`TransitionTable::is_terminal`](crate::table::TransitionTable::is_terminal).
///
/// # Example
///
/// ```
/// use trellis::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Event` trait implementation for a simple enum.
///
/// Same shape as [`state_enum!`]: derives the full trait set and names each
/// variant after its identifier.
///
/// # Example
///
/// ```
/// use trellis::event_enum;
///
/// event_enum! {
///     pub enum WorkflowEvent {
///         Begin,
///         Finish,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
