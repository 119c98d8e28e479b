//! Document Approval Workflow
//!
//! This example demonstrates a review/approval cycle with a rejection loop,
//! and how a presentation layer can use `valid_events` to decide which
//! actions to expose.
//!
//! Run with: cargo run --example document_workflow

use trellis::core::Event;
use trellis::{event_enum, state_enum, TransitionTableBuilder};

state_enum! {
    enum DocumentState {
        Draft,
        Submitted,
        Reviewing,
        Approved,
        Rejected,
        Published,
        Archived,
    }
}

event_enum! {
    enum DocumentEvent {
        Submit,
        Review,
        Approve,
        Reject,
        Publish,
        Archive,
        Revise,
    }
}

fn main() {
    println!("=== Document Workflow Example ===\n");

    let table = TransitionTableBuilder::new()
        .edge(DocumentState::Draft, DocumentEvent::Submit, DocumentState::Submitted)
        .edge(DocumentState::Submitted, DocumentEvent::Review, DocumentState::Reviewing)
        .edge(DocumentState::Reviewing, DocumentEvent::Approve, DocumentState::Approved)
        .edge(DocumentState::Approved, DocumentEvent::Publish, DocumentState::Published)
        .edge(DocumentState::Reviewing, DocumentEvent::Reject, DocumentState::Rejected)
        .edge(DocumentState::Rejected, DocumentEvent::Revise, DocumentState::Draft)
        .edge(DocumentState::Published, DocumentEvent::Archive, DocumentState::Archived)
        .build();

    // What can a user do with a draft? Sort by name for stable display.
    let mut actions = table.valid_events(&DocumentState::Draft);
    actions.sort_by_key(|e| e.name().to_string());
    println!("Available actions for a draft: {:?}", actions);

    // Validate the full approval workflow before running it
    let path = [
        DocumentEvent::Submit,
        DocumentEvent::Review,
        DocumentEvent::Approve,
        DocumentEvent::Publish,
    ];
    match table.validate_path(&DocumentState::Draft, &path) {
        Ok(end) => println!("Valid workflow! Final state: {:?}", end),
        Err(err) => println!("Invalid workflow: {}", err),
    }

    // The rejection loop brings a document back to Draft
    let rework = [
        DocumentEvent::Submit,
        DocumentEvent::Review,
        DocumentEvent::Reject,
        DocumentEvent::Revise,
    ];
    match table.validate_path(&DocumentState::Draft, &rework) {
        Ok(end) => println!("Rejection loop ends back at {:?}", end),
        Err(err) => println!("Invalid workflow: {}", err),
    }

    println!(
        "Is Archived terminal? {}",
        table.is_terminal(&DocumentState::Archived)
    );

    println!("\n=== Example Complete ===");
}
