// Case study 4: scopes, shadowing and constants

const COUNTRY: &str = "India";

fn old_score_line(score: i32) -> String {
    format!("Old Score: {score}")
}

/// Declares its own `score`; the caller's binding is untouched.
fn update_score() -> String {
    let score = 20;
    format!("New Score: {score}")
}

fn country_line() -> String {
    format!("Country: {COUNTRY}")
}

fn main() {
    case_studies::bootstrap("Case study 4: scopes");

    let score = 10;
    // A second `let score` here would shadow this binding, not clash with it.
    println!("{}", old_score_line(score));

    println!("{}", update_score());
    tracing::debug!(score, "outer score after update_score");

    // COUNTRY = "USA"; does not compile: constants cannot be assigned.
    println!("{}", country_line());
}
