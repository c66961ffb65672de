// Case study 18: async payments behind an injected gateway
//
// The processor never knows which gateway it talks to, so a mock can stand
// in for the bank. Each payment is awaited before the next starts; there is
// no retry, timeout or idempotency key.

use async_trait::async_trait;
use std::fmt;

// =============================================================================
// Milestone 1: Gateway abstraction
// =============================================================================

#[async_trait]
trait PaymentGateway: Send + Sync {
    async fn process_payment(&self, amount: f64) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentOutcome {
    Succeeded,
    Failed,
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOutcome::Succeeded => f.write_str("Payment successful!"),
            PaymentOutcome::Failed => f.write_str("Payment failed."),
        }
    }
}

// =============================================================================
// Milestone 2: Processor that forwards to the injected gateway
// =============================================================================

struct PaymentProcessor {
    gateway: Box<dyn PaymentGateway>,
}

impl PaymentProcessor {
    fn new(gateway: Box<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    async fn pay(&self, amount: f64) -> PaymentOutcome {
        if self.gateway.process_payment(amount).await {
            tracing::info!(amount, "payment accepted");
            PaymentOutcome::Succeeded
        } else {
            tracing::warn!(amount, "payment declined");
            PaymentOutcome::Failed
        }
    }
}

#[async_trait]
impl PaymentGateway for PaymentProcessor {
    async fn process_payment(&self, amount: f64) -> bool {
        self.gateway.process_payment(amount).await
    }
}

// =============================================================================
// Milestone 3: Concrete gateways
// =============================================================================

struct BankTransferGateway;

#[async_trait]
impl PaymentGateway for BankTransferGateway {
    async fn process_payment(&self, amount: f64) -> bool {
        println!("Processing bank transfer of ${amount}.");
        // Simulated API call: always accepted.
        true
    }
}

struct FailingMockGateway;

#[async_trait]
impl PaymentGateway for FailingMockGateway {
    async fn process_payment(&self, amount: f64) -> bool {
        println!("Mock payment of ${amount} failed.");
        false
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    case_studies::bootstrap("Case study 18: payments");

    let processor = PaymentProcessor::new(Box::new(BankTransferGateway));
    println!("{}", processor.pay(300.0).await);

    let error_test_processor = PaymentProcessor::new(Box::new(FailingMockGateway));
    println!("{}", error_test_processor.pay(999.0).await);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingGateway {
        accept: bool,
        amounts: Arc<Mutex<Vec<f64>>>,
    }

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn process_payment(&self, amount: f64) -> bool {
            self.amounts.lock().unwrap().push(amount);
            self.accept
        }
    }

    #[tokio::test]
    async fn test_bank_transfer_succeeds() {
        let processor = PaymentProcessor::new(Box::new(BankTransferGateway));
        assert_eq!(processor.pay(300.0).await, PaymentOutcome::Succeeded);
    }

    #[tokio::test]
    async fn test_failing_gateway() {
        let processor = PaymentProcessor::new(Box::new(FailingMockGateway));
        assert_eq!(processor.pay(999.0).await, PaymentOutcome::Failed);
    }

    #[tokio::test]
    async fn test_forwards_amount_once_per_call() {
        let amounts = Arc::new(Mutex::new(Vec::new()));
        let processor = PaymentProcessor::new(Box::new(RecordingGateway {
            accept: true,
            amounts: Arc::clone(&amounts),
        }));

        processor.pay(10.0).await;
        assert!(processor.process_payment(25.5).await);

        assert_eq!(*amounts.lock().unwrap(), vec![10.0, 25.5]);
    }

    #[tokio::test]
    async fn test_processor_can_wrap_processor() {
        let inner = PaymentProcessor::new(Box::new(FailingMockGateway));
        let outer = PaymentProcessor::new(Box::new(inner));
        assert_eq!(outer.pay(1.0).await, PaymentOutcome::Failed);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(PaymentOutcome::Succeeded.to_string(), "Payment successful!");
        assert_eq!(PaymentOutcome::Failed.to_string(), "Payment failed.");
    }
}
