// Case study 12: function shapes
//
// Optional, rest and default parameters, callbacks, recursion, an
// "overloaded" report generator and function-type aliases.

use serde::Serialize;
use std::error::Error;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Milestone 1: Optional parameter
// =============================================================================

fn display_member(id: u32, name: &str, email: Option<&str>) -> Vec<String> {
    let mut lines = vec![format!("ID: {id}, Name: {name}")];
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        lines.push(format!("Email: {email}"));
    }
    lines
}

// =============================================================================
// Milestone 2: Rest and default parameters
// =============================================================================

fn calculate_fines(fines: &[f64]) -> f64 {
    fines.iter().sum()
}

const DEFAULT_DISCOUNT_RATE: f64 = 0.1;

fn membership_fee(price: f64, discount_rate: Option<f64>) -> f64 {
    let rate = discount_rate.unwrap_or(DEFAULT_DISCOUNT_RATE);
    price - price * rate
}

// =============================================================================
// Milestone 3: Callbacks and function-type aliases
// =============================================================================

type VisitorFormatter = fn(&str) -> String;

fn greet_visitor<F>(visitor: &str, formatter: F) -> String
where
    F: FnOnce(&str) -> String,
{
    formatter(visitor)
}

fn vip_greet(name: &str) -> String {
    format!("Welcome VIP {name}!")
}

fn console_greet(name: &str) -> String {
    format!("Hello, {name}!")
}

// =============================================================================
// Milestone 4: Recursion
// =============================================================================

/// `None` once the product no longer fits in a `u64` (past 20!).
fn factorial(n: u64) -> Option<u64> {
    if n <= 1 {
        return Some(1);
    }
    factorial(n - 1)?.checked_mul(n)
}

// =============================================================================
// Milestone 5: One name, two report formats
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ReportFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Error, Debug)]
enum ReportError {
    #[error("Failed to serialise report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
struct Book {
    title: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Plain report: one line per item.
fn generate_report<T: fmt::Display>(data: &[T]) -> String {
    data.iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn generate_report_as<T>(data: &[T], format: ReportFormat) -> Result<String, ReportError>
where
    T: fmt::Display + Serialize,
{
    match format {
        ReportFormat::Plain => Ok(generate_report(data)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(data)?),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    case_studies::bootstrap("Case study 12: functions");

    let members = [(1, "Alice", None), (2, "Bob", Some("bob@example.com"))];
    for (id, name, email) in members {
        for line in display_member(id, name, email) {
            println!("{line}");
        }
    }

    println!("{}", calculate_fines(&[5.0, 10.0, 2.5]));

    println!("{}", membership_fee(100.0, None));
    println!("{}", membership_fee(100.0, Some(0.2)));

    let console_formatter: VisitorFormatter = console_greet;
    println!("{}", greet_visitor("Alice", vip_greet));
    println!("{}", greet_visitor("Bob", console_formatter));

    match factorial(5) {
        Some(value) => println!("{value}"),
        None => tracing::warn!("factorial overflowed"),
    }

    let books = [Book {
        title: "1984".to_string(),
    }];
    println!("{}", generate_report(&books));
    println!("{}", generate_report_as(&books, ReportFormat::Json)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_member_optional_email() {
        assert_eq!(display_member(1, "Alice", None), vec!["ID: 1, Name: Alice"]);
        assert_eq!(
            display_member(2, "Bob", Some("bob@example.com")),
            vec!["ID: 2, Name: Bob", "Email: bob@example.com"]
        );
        assert_eq!(display_member(3, "Eve", Some("")).len(), 1);
    }

    #[test]
    fn test_calculate_fines() {
        assert_eq!(calculate_fines(&[5.0, 10.0, 2.5]), 17.5);
        assert_eq!(calculate_fines(&[]), 0.0);
    }

    #[test]
    fn test_membership_fee() {
        assert_eq!(membership_fee(100.0, None), 90.0);
        assert_eq!(membership_fee(100.0, Some(0.2)), 80.0);
        assert_eq!(membership_fee(100.0, Some(0.0)), 100.0);
    }

    #[test]
    fn test_greetings() {
        assert_eq!(greet_visitor("Alice", vip_greet), "Welcome VIP Alice!");
        assert_eq!(greet_visitor("Bob", console_greet), "Hello, Bob!");
        assert_eq!(greet_visitor("Cy", |n| n.to_uppercase()), "CY");
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_plain_report() {
        let books = [
            Book { title: "1984".into() },
            Book { title: "The Hobbit".into() },
        ];
        assert_eq!(generate_report(&books), "1984\nThe Hobbit");
        assert_eq!(generate_report::<Book>(&[]), "");
        assert_eq!(
            generate_report_as(&books, ReportFormat::default()).unwrap(),
            "1984\nThe Hobbit"
        );
    }

    #[test]
    fn test_json_report() {
        let books = [Book { title: "1984".into() }];
        let report = generate_report_as(&books, ReportFormat::Json).unwrap();
        assert_eq!(report, "[\n  {\n    \"title\": \"1984\"\n  }\n]");
    }
}
