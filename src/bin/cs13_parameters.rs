// Case study 13: optional and default parameters

/// An age of zero reads as not given.
fn describe_person(name: &str, age: Option<u32>) -> String {
    let age = age
        .filter(|&a| a != 0)
        .map_or_else(|| "Unknown".to_string(), |a| a.to_string());
    format!("Name: {name}, Age: {age}")
}

fn calculate_price(price: f64, discount: Option<f64>) -> f64 {
    let discount = discount.unwrap_or(0.1);
    price - price * discount
}

fn main() {
    case_studies::bootstrap("Case study 13: parameters");

    println!("{}", describe_person("Eve", None));
    println!("{}", describe_person("Frank", Some(28)));
    println!("{}", calculate_price(100.0, None)); // 90
    println!("{}", calculate_price(100.0, Some(0.2))); // 80
}
