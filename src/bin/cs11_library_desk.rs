// Case study 11: loops over a library front desk
//
// Counting with `for`, searching with an early exit, draining a FIFO queue,
// mutating a map in place and iterating backwards.

use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionKind {
    Checkout,
    Return,
    Cancelled,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transaction {
    id: u32,
    kind: TransactionKind,
}

const fn tx(id: u32, kind: TransactionKind) -> Transaction {
    Transaction { id, kind }
}

type Inventory = BTreeMap<String, u32>;

// =============================================================================
// Milestone 1: Counting per kind
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
struct TransactionCounts {
    checkout: usize,
    #[serde(rename = "return")]
    returned: usize,
    priority: usize,
    cancelled: usize,
}

fn count_by_kind(transactions: &[Transaction]) -> TransactionCounts {
    let mut counts = TransactionCounts::default();
    for transaction in transactions {
        let slot = match transaction.kind {
            TransactionKind::Checkout => &mut counts.checkout,
            TransactionKind::Return => &mut counts.returned,
            TransactionKind::Priority => &mut counts.priority,
            TransactionKind::Cancelled => &mut counts.cancelled,
        };
        *slot += 1;
    }
    counts
}

// =============================================================================
// Milestone 2: Early exit
// =============================================================================

fn first_priority(transactions: &[Transaction]) -> Option<usize> {
    transactions
        .iter()
        .position(|t| t.kind == TransactionKind::Priority)
}

// =============================================================================
// Milestone 3: Draining a copy as a queue
// =============================================================================

fn drain_returns(transactions: &[Transaction]) -> Vec<String> {
    let mut queue: VecDeque<Transaction> = transactions.iter().copied().collect();
    let mut handled = Vec::new();

    while let Some(current) = queue.pop_front() {
        if current.kind == TransactionKind::Return {
            handled.push(format!("Handling return transaction {}", current.id));
        }
    }
    handled
}

// =============================================================================
// Milestone 4: In-place map update and reverse iteration
// =============================================================================

fn reset_inventory(inventory: &mut Inventory) {
    for count in inventory.values_mut() {
        *count = 0;
    }
}

fn reversed_visitors(visitors: &[&str]) -> Vec<String> {
    visitors.iter().rev().map(|v| v.to_string()).collect()
}

const TRANSACTIONS: [Transaction; 5] = [
    tx(1, TransactionKind::Checkout),
    tx(2, TransactionKind::Cancelled),
    tx(3, TransactionKind::Return),
    tx(4, TransactionKind::Priority),
    tx(5, TransactionKind::Checkout),
];

fn main() -> Result<(), Box<dyn Error>> {
    case_studies::bootstrap("Case study 11: library desk");

    let mut inventory: Inventory = [("The Hobbit", 3), ("1984", 5), ("TypeScript Guide", 2)]
        .into_iter()
        .map(|(title, count)| (title.to_string(), count))
        .collect();
    let visitors = ["Alice", "Bob", "Carol"];

    println!("{}", serde_json::to_string(&count_by_kind(&TRANSACTIONS))?);

    match first_priority(&TRANSACTIONS) {
        Some(index) => tracing::info!(index, "priority transaction reached"),
        None => tracing::info!("no priority transaction"),
    }

    for line in drain_returns(&TRANSACTIONS) {
        println!("{line}");
    }

    reset_inventory(&mut inventory);
    tracing::debug!(?inventory, "inventory reset");

    for visitor in reversed_visitors(&visitors) {
        println!("{visitor}");
    }

    Ok(())
}
