// Case study 2: variables, functions, comments and a first struct

// =============================================================================
// Milestone 1: A variable and a formatted line
// =============================================================================

fn favourite_fruit_line(fruit: &str) -> String {
    format!("My favorite fruit is {fruit}.")
}

// =============================================================================
// Milestone 2: A function with typed input and output
// =============================================================================

/// Returns twice the given number.
fn double_number(num: f64) -> f64 {
    num * 2.0
}

/*
 * Milestone 3: a struct with a method.
 * Person carries no data yet; the method is all it has.
 */

struct Person;

impl Person {
    fn say_hello(&self) -> &'static str {
        "Hello!"
    }
}

// =============================================================================
// Demo
// =============================================================================

fn main() {
    case_studies::bootstrap("Case study 2: basics");

    let fav_fruit = "Grapes";
    println!("{}", favourite_fruit_line(fav_fruit));

    println!("{}", double_number(5.0));

    let p = Person;
    println!("{}", p.say_hello());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruit_line() {
        assert_eq!(favourite_fruit_line("Grapes"), "My favorite fruit is Grapes.");
    }

    #[test]
    fn test_double_number() {
        assert_eq!(double_number(5.0), 10.0);
        assert_eq!(double_number(-1.5), -3.0);
        assert_eq!(double_number(0.0), 0.0);
    }

    #[test]
    fn test_say_hello() {
        assert_eq!(Person.say_hello(), "Hello!");
    }
}
