// Case study 6: default parameters, optional values and early rejection

use thiserror::Error;

// =============================================================================
// Milestone 1: Error type
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
enum TransactionError {
    #[error("Amount cannot be negative")]
    NegativeAmount { amount: f64 },
}

// =============================================================================
// Milestone 2: Processing with optional description and credit flag
// =============================================================================

fn process_transaction(
    amount: f64,
    description: Option<&str>,
    is_credit: bool,
) -> Result<String, TransactionError> {
    if amount < 0.0 {
        return Err(TransactionError::NegativeAmount { amount });
    }

    let transaction_type = if is_credit { "Credit" } else { "Debit" };
    let transaction_description = description.unwrap_or("No description");

    Ok(format!(
        "Processing transaction: Amount: {amount}, Description: {transaction_description}, Type: {transaction_type}"
    ))
}

// =============================================================================
// Milestone 3: Defaults through a request value
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct TransactionRequest {
    amount: f64,
    description: Option<String>,
    is_credit: bool,
}

impl TransactionRequest {
    /// Debit with no description.
    fn new(amount: f64) -> Self {
        Self {
            amount,
            description: None,
            is_credit: false,
        }
    }

    fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn credit(mut self) -> Self {
        self.is_credit = true;
        self
    }

    fn process(&self) -> Result<String, TransactionError> {
        process_transaction(self.amount, self.description.as_deref(), self.is_credit)
    }
}

// =============================================================================
// Demo
// =============================================================================

fn main() {
    case_studies::bootstrap("Case study 6: transactions");

    let rejected = TransactionRequest::new(-100.0)
        .description("Processed on 2024-01-25")
        .credit();
    match rejected.process() {
        Ok(line) => println!("{line}"),
        Err(err) => {
            tracing::warn!(amount = rejected.amount, "transaction rejected");
            eprintln!("{err}");
        }
    }

    let requests = [
        TransactionRequest::new(100.0)
            .description("Processed on 2024-01-25")
            .credit(),
        TransactionRequest::new(100.0),
    ];
    for request in &requests {
        // Non-negative amounts never fail.
        if let Ok(line) = request.process() {
            println!("{line}");
        }
    }
}
