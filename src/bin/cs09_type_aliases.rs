// Case study 9: type aliases for values, records, callbacks and generics

use std::fmt;

// =============================================================================
// Milestone 1: Aliases for simple and record types
// =============================================================================

type CustomerId = String;

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: CustomerId,
    name: String,
    email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Milestone 2: Alias for a function type
// =============================================================================

type ProcessOrder = fn(u32, &mut dyn FnMut(OrderStatus)) -> String;

fn process_order(order_id: u32, on_status: &mut dyn FnMut(OrderStatus)) -> String {
    let line = format!("Processing order {order_id}");
    on_status(OrderStatus::Shipped);
    line
}

// =============================================================================
// Milestone 3: Generic container
// =============================================================================

struct Container<T> {
    value: T,
}

impl<T> Container<T> {
    fn new(value: T) -> Self {
        Self { value }
    }

    fn process<R>(&self, callback: impl FnOnce(&T) -> R) -> R {
        callback(&self.value)
    }
}

fn main() {
    case_studies::bootstrap("Case study 9: type aliases");

    let processor: ProcessOrder = process_order;
    let mut reported = Vec::new();
    println!("{}", processor(1, &mut |status| reported.push(status)));
    for status in reported {
        println!("Order status: {status}");
    }

    let customer_container = Container::new(Customer {
        id: "1".to_string(),
        name: "Nilashis Saha".to_string(),
        email: None,
    });
    customer_container.process(|customer| {
        tracing::debug!(id = %customer.id, has_email = customer.email.is_some(), "processing customer");
        println!("Customer name: {}", customer.name);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
        assert_eq!(OrderStatus::Shipped.to_string(), "shipped");
        assert_eq!(OrderStatus::Delivered.to_string(), "delivered");
    }

    #[test]
    fn test_process_order_reports_shipped_once() {
        let processor: ProcessOrder = process_order;
        let mut seen = Vec::new();
        let line = processor(7, &mut |status| seen.push(status));

        assert_eq!(line, "Processing order 7");
        assert_eq!(seen, vec![OrderStatus::Shipped]);
    }

    #[test]
    fn test_container_passes_value() {
        let container = Container::new(Customer {
            id: "1".into(),
            name: "Nilashis Saha".into(),
            email: Some("n@example.com".into()),
        });
        let name = container.process(|c| c.name.clone());
        assert_eq!(name, "Nilashis Saha");
    }

    #[test]
    fn test_container_is_generic() {
        let container = Container::new(41);
        assert_eq!(container.process(|n| n + 1), 42);
    }
}
