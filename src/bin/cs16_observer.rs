// Case study 16: observer fan-out for a drink order
//
// Observers are notified in registration order, each exactly once. There is
// no unsubscribe and no isolation: a panicking observer stops the fan-out.

// =============================================================================
// Milestone 1: Observer trait and concrete observers
// =============================================================================

trait Observer {
    fn name(&self) -> &str;
    fn update(&self, msg: &str) -> String;
}

struct Customer;

impl Observer for Customer {
    fn name(&self) -> &str {
        "Customer"
    }

    fn update(&self, msg: &str) -> String {
        format!("{}: {msg}", self.name())
    }
}

struct Inventory;

impl Observer for Inventory {
    fn name(&self) -> &str {
        "Inventory"
    }

    fn update(&self, msg: &str) -> String {
        format!("{}: {msg}", self.name())
    }
}

/// Announces its promotion whatever the event says.
struct PromotionSystem {
    promotion_message: String,
}

impl PromotionSystem {
    fn new(promotion_message: impl Into<String>) -> Self {
        Self {
            promotion_message: promotion_message.into(),
        }
    }
}

impl Observer for PromotionSystem {
    fn name(&self) -> &str {
        "PromotionSystem"
    }

    fn update(&self, _msg: &str) -> String {
        format!("{}: {}", self.name(), self.promotion_message)
    }
}

// =============================================================================
// Milestone 2: Subject
// =============================================================================

#[derive(Default)]
struct DrinkOrder {
    observers: Vec<Box<dyn Observer>>,
}

impl DrinkOrder {
    fn new() -> Self {
        Self::default()
    }

    fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    fn notify_all(&self, msg: &str) -> Vec<String> {
        tracing::debug!(observers = self.observers.len(), msg, "notifying observers");
        self.observers.iter().map(|obs| obs.update(msg)).collect()
    }

    fn complete_order(&self) -> Vec<String> {
        self.notify_all("Order complete!")
    }
}

fn main() {
    case_studies::bootstrap("Case study 16: observer");

    let mut order = DrinkOrder::new();
    order.add_observer(Box::new(Customer));
    order.add_observer(Box::new(Inventory));
    order.add_observer(Box::new(PromotionSystem::new(
        "Festive offer: Buy 1 Get 1 Free!",
    )));

    for line in order.complete_order() {
        println!("{line}");
    }
}
