// Case study 10: conditionals, bit tests and lookup tables

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Milestone 1: Sign and parity
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
    Zero,
}

fn sign(num: i64) -> Sign {
    match num {
        n if n > 0 => Sign::Positive,
        n if n < 0 => Sign::Negative,
        _ => Sign::Zero,
    }
}

/// Only positive numbers get a message.
fn check_sign(num: i64) -> Option<String> {
    (sign(num) == Sign::Positive).then(|| format!("{num} is positive"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parity {
    Even,
    Odd,
}

fn parity(num: i64) -> Parity {
    if num & 1 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

fn check_even_odd(num: i64) -> String {
    match parity(num) {
        Parity::Even => format!("{num} is even"),
        Parity::Odd => format!("{num} is odd"),
    }
}

// =============================================================================
// Milestone 2: Grade table and feedback
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grade {
    A,
    B,
    C,
    D,
    F,
}

/// Inclusive lower bounds, highest first.
const GRADE_CUTOFFS: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

fn grade(score: f64) -> Grade {
    GRADE_CUTOFFS
        .iter()
        .find(|(cutoff, _)| score >= *cutoff)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

impl Grade {
    fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    fn feedback(&self) -> &'static str {
        match self {
            Grade::A => "Excellent!",
            Grade::B => "Good!",
            Grade::C => "Average!",
            Grade::D => "Needs Improvement!",
            Grade::F => "Fail!",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade '{other}'")),
        }
    }
}

fn feedback(letter: &str) -> &'static str {
    letter
        .parse::<Grade>()
        .map(|grade| grade.feedback())
        .unwrap_or("Invalid Grade!")
}

fn main() {
    case_studies::bootstrap("Case study 10: control flow");

    if let Some(line) = check_sign(10) {
        println!("{line}");
    }
    println!("{}", check_even_odd(37));
    println!("{}", grade(90.0));
    println!("{}", feedback(grade(40.0).as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(sign(10), Sign::Positive);
        assert_eq!(sign(-3), Sign::Negative);
        assert_eq!(sign(0), Sign::Zero);
    }

    #[test]
    fn test_check_sign_only_reports_positive() {
        assert_eq!(check_sign(10), Some("10 is positive".to_string()));
        assert_eq!(check_sign(0), None);
        assert_eq!(check_sign(-5), None);
    }

    #[test]
    fn test_parity() {
        assert_eq!(check_even_odd(37), "37 is odd");
        assert_eq!(check_even_odd(0), "0 is even");
        assert_eq!(parity(-3), Parity::Odd);
        assert_eq!(parity(-4), Parity::Even);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(95.0), Grade::A);
        assert_eq!(grade(90.0), Grade::A);
        assert_eq!(grade(89.9), Grade::B);
        assert_eq!(grade(80.0), Grade::B);
        assert_eq!(grade(70.0), Grade::C);
        assert_eq!(grade(60.0), Grade::D);
        assert_eq!(grade(59.99), Grade::F);
        assert_eq!(grade(40.0), Grade::F);
    }

    #[test]
    fn test_grade_to_feedback() {
        assert_eq!(grade(95.0).to_string(), "A");
        assert_eq!(feedback("A"), "Excellent!");
        assert_eq!(grade(40.0).to_string(), "F");
        assert_eq!(feedback("F"), "Fail!");
        assert_eq!(feedback("B"), "Good!");
        assert_eq!(feedback("C"), "Average!");
        assert_eq!(feedback("D"), "Needs Improvement!");
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(feedback("E"), "Invalid Grade!");
        assert_eq!(feedback("a"), "Invalid Grade!");
        assert_eq!(feedback(""), "Invalid Grade!");
    }
}
