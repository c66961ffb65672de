// Case study 5: accepting loosely-typed survey answers
//
// Answers arrive as arbitrary JSON. Strings, numbers and arrays are recorded;
// any other kind is refused before it reaches the answer map.

use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::error::Error;
use thiserror::Error;

type Answers = BTreeMap<u32, Value>;

#[derive(Error, Debug, Clone, PartialEq)]
enum SurveyError {
    #[error("Question {question_id}: {kind} is not a valid answer type")]
    UnsupportedAnswer { question_id: u32, kind: &'static str },
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Records a single answer into a fresh map.
fn record_answer(question_id: u32, answer: &Value) -> Result<Answers, SurveyError> {
    match answer {
        Value::String(_) | Value::Number(_) | Value::Array(_) => {
            let mut answers = Answers::new();
            answers.insert(question_id, answer.clone());
            Ok(answers)
        }
        other => Err(SurveyError::UnsupportedAnswer {
            question_id,
            kind: kind_of(other),
        }),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    case_studies::bootstrap("Case study 5: survey answers");

    let survey_answers = [
        json!("Yes"),
        json!(5),
        json!(["Option A", "Option B"]),
        json!(true),
    ];

    for (question_id, answer) in (1..).zip(survey_answers.iter()) {
        match record_answer(question_id, answer) {
            Ok(answers) => println!("{}", serde_json::to_string(&answers)?),
            Err(err) => tracing::warn!("{err}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_answer() {
        let answers = record_answer(1, &json!("Yes")).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[&1], json!("Yes"));
    }

    #[test]
    fn test_number_and_array_answers() {
        assert_eq!(record_answer(2, &json!(5)).unwrap()[&2], json!(5));

        let answers = record_answer(3, &json!(["Option A", "Option B"])).unwrap();
        assert_eq!(answers[&3], json!(["Option A", "Option B"]));
    }

    #[test]
    fn test_each_call_starts_empty() {
        let first = record_answer(1, &json!("Yes")).unwrap();
        let second = record_answer(2, &json!(5)).unwrap();
        assert!(!first.contains_key(&2));
        assert!(!second.contains_key(&1));
    }

    #[test]
    fn test_rejected_kinds() {
        assert_eq!(
            record_answer(4, &json!(true)),
            Err(SurveyError::UnsupportedAnswer {
                question_id: 4,
                kind: "boolean"
            })
        );
        assert!(record_answer(5, &Value::Null).is_err());
        assert!(record_answer(6, &json!({"a": 1})).is_err());
    }

    #[test]
    fn test_serialised_shape() {
        let answers = record_answer(1, &json!("Yes")).unwrap();
        assert_eq!(serde_json::to_string(&answers).unwrap(), r#"{"1":"Yes"}"#);
    }

    #[test]
    fn test_error_message() {
        let err = record_answer(4, &json!(false)).unwrap_err();
        assert_eq!(err.to_string(), "Question 4: boolean is not a valid answer type");
    }
}
