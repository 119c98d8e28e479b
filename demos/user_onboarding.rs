//! User Onboarding
//!
//! This example demonstrates a domain service wrapping the table: it loads a
//! user's current state, asks the table for the next one, and persists the
//! result. The table is shared read-only once built.
//!
//! Run with: cargo run --example user_onboarding

use std::collections::HashMap;
use std::sync::Arc;

use trellis::table::{TransitionError, TransitionTable};
use trellis::{event_enum, state_enum, TransitionTableBuilder};

state_enum! {
    enum UserState {
        Initial,
        EmailPendingVerification,
        EmailVerified,
        SignUpComplete,
        SignupRejected,
    }
}

event_enum! {
    enum UserEvent {
        SubmitSignup,
        ClickVerificationLink,
        SignupFailed,
        CompleteProfile,
    }
}

fn onboarding_table() -> TransitionTable<UserState, UserEvent> {
    TransitionTableBuilder::new()
        .edge(UserState::Initial, UserEvent::SubmitSignup, UserState::EmailPendingVerification)
        .edge(UserState::Initial, UserEvent::SignupFailed, UserState::SignupRejected)
        .edge(
            UserState::EmailPendingVerification,
            UserEvent::ClickVerificationLink,
            UserState::EmailVerified,
        )
        .edge(
            UserState::EmailPendingVerification,
            UserEvent::SignupFailed,
            UserState::SignupRejected,
        )
        .edge(UserState::EmailVerified, UserEvent::CompleteProfile, UserState::SignUpComplete)
        .edge(UserState::EmailVerified, UserEvent::SignupFailed, UserState::SignupRejected)
        .build()
}

// Stand-in for a persistence layer
struct UserService {
    table: Arc<TransitionTable<UserState, UserEvent>>,
    states: HashMap<u64, UserState>,
}

impl UserService {
    fn new(table: Arc<TransitionTable<UserState, UserEvent>>) -> Self {
        Self {
            table,
            states: HashMap::new(),
        }
    }

    fn signup(&mut self, user_id: u64) {
        self.states.insert(user_id, UserState::Initial);
    }

    fn process_event(
        &mut self,
        user_id: u64,
        event: UserEvent,
    ) -> Result<UserState, TransitionError<UserState, UserEvent>> {
        let current = self
            .states
            .get(&user_id)
            .cloned()
            .unwrap_or(UserState::Initial);
        let next = self.table.transition(&current, &event)?;
        self.states.insert(user_id, next.clone());
        Ok(next)
    }
}

fn main() {
    println!("=== User Onboarding Example ===\n");

    let table = Arc::new(onboarding_table());
    let mut service = UserService::new(Arc::clone(&table));

    service.signup(42);

    for event in [
        UserEvent::SubmitSignup,
        UserEvent::ClickVerificationLink,
        UserEvent::CompleteProfile,
    ] {
        match service.process_event(42, event.clone()) {
            Ok(state) => println!("User 42: {:?} accepted, now {:?}", event, state),
            Err(err) => println!("User 42: {}", err),
        }
    }

    // Completed signups accept no further events
    if let Err(err) = service.process_event(42, UserEvent::SubmitSignup) {
        println!("\nRejected: {}", err);
    }

    println!("\n=== Example Complete ===");
}
