// Case study 14: a generic collection and a generic function

/// Append-only store; no capacity limit, nothing is ever evicted.
#[derive(Debug, Clone, PartialEq)]
struct FeedbackBox<T> {
    items: Vec<T>,
}

impl<T> Default for FeedbackBox<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FeedbackBox<T> {
    fn new() -> Self {
        Self::default()
    }

    fn add_feedback(&mut self, item: T) {
        self.items.push(item);
    }

    fn all_feedback(&self) -> &[T] {
        &self.items
    }
}

fn first_item<T>(items: &[T]) -> Option<&T> {
    items.first()
}

fn main() {
    case_studies::bootstrap("Case study 14: generics");

    let mut string_feedback = FeedbackBox::<String>::new();
    string_feedback.add_feedback("Great work!".to_string());
    string_feedback.add_feedback("Needs improvement".to_string());
    println!("{:?}", string_feedback.all_feedback());

    let number_array = [10, 20, 30];
    match first_item(&number_array) {
        Some(first) => println!("{first}"),
        None => println!("(empty)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_keeps_insertion_order() {
        let mut feedback = FeedbackBox::new();
        feedback.add_feedback("Great work!");
        feedback.add_feedback("Needs improvement");
        assert_eq!(feedback.all_feedback(), &["Great work!", "Needs improvement"]);
    }

    #[test]
    fn test_feedback_box_with_numbers() {
        let mut scores: FeedbackBox<u8> = FeedbackBox::default();
        assert!(scores.all_feedback().is_empty());
        for score in 1..=100 {
            scores.add_feedback(score);
        }
        assert_eq!(scores.all_feedback().len(), 100);
    }

    #[test]
    fn test_first_item() {
        assert_eq!(first_item(&[10, 20, 30]), Some(&10));
        assert_eq!(first_item::<i32>(&[]), None);
        assert_eq!(first_item(&["only"]), Some(&"only"));
    }
}
