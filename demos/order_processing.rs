//! E-commerce Order Processing
//!
//! This example demonstrates an order lifecycle driven by a transition table.
//!
//! Key concepts:
//! - Happy path, cancellation path, and refund path in one table
//! - The engine holds no current state; the Order entity does
//! - Rejecting invalid events with a typed error
//!
//! Run with: cargo run --example order_processing

use trellis::table::TransitionTable;
use trellis::{event_enum, state_enum, Transition};

state_enum! {
    enum OrderState {
        Pending,
        Processing,
        Shipped,
        Delivered,
        Cancelled,
        Refunded,
    }
}

event_enum! {
    enum OrderEvent {
        Confirm,
        Ship,
        Deliver,
        Cancel,
        Refund,
    }
}

// Order entity; the table never sees it, only its state
struct Order {
    id: u64,
    state: OrderState,
}

fn order_table() -> TransitionTable<OrderState, OrderEvent> {
    let mut table = TransitionTable::new();
    table.register_batch([
        // Happy path
        Transition::new(OrderState::Pending, OrderEvent::Confirm, OrderState::Processing),
        Transition::new(OrderState::Processing, OrderEvent::Ship, OrderState::Shipped),
        Transition::new(OrderState::Shipped, OrderEvent::Deliver, OrderState::Delivered),
        // Cancellation path
        Transition::new(OrderState::Pending, OrderEvent::Cancel, OrderState::Cancelled),
        Transition::new(OrderState::Processing, OrderEvent::Cancel, OrderState::Cancelled),
        // Refund path
        Transition::new(OrderState::Delivered, OrderEvent::Refund, OrderState::Refunded),
        Transition::new(OrderState::Cancelled, OrderEvent::Refund, OrderState::Refunded),
    ]);
    table
}

fn main() {
    println!("=== Order Processing Example ===\n");

    let table = order_table();
    let mut order = Order {
        id: 1001,
        state: OrderState::Pending,
    };

    // Walk the happy path, persisting each new state on the entity
    for event in [OrderEvent::Confirm, OrderEvent::Ship, OrderEvent::Deliver] {
        match table.transition(&order.state, &event) {
            Ok(next) => {
                println!("Order {}: {:?} --{:?}--> {:?}", order.id, order.state, event, next);
                order.state = next;
            }
            Err(err) => println!("Order {}: {}", order.id, err),
        }
    }

    // A cancellation after delivery is rejected with a typed error
    if let Err(err) = table.transition(&order.state, &OrderEvent::Cancel) {
        println!("\nRejected: {}", err);
    }

    // Validate a full workflow up front without touching any entity
    let path = [OrderEvent::Confirm, OrderEvent::Ship, OrderEvent::Deliver];
    match table.validate_path(&OrderState::Pending, &path) {
        Ok(end) => println!("\nProposed path is valid, ends at {:?}", end),
        Err(err) => println!("\nProposed path is invalid: {}", err),
    }

    println!("\n=== Example Complete ===");
}
