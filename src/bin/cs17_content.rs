// Case study 17: an abstract content base and one concrete kind
//
// The trait plays the abstract class: shared state lives in `ContentCore`,
// and every implementor must say what type it is.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum ContentError {
    #[error("Only instructors can set the due date.")]
    NotInstructor,

    #[error("Cannot change due date after publishing.")]
    AlreadyPublished,
}

// =============================================================================
// Milestone 1: Shared content state and the trait
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct ContentCore {
    title: String,
    author: String,
    published: bool,
}

impl ContentCore {
    fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published: false,
        }
    }
}

trait Content {
    fn core(&self) -> &ContentCore;
    fn core_mut(&mut self) -> &mut ContentCore;
    fn content_type(&self) -> &'static str;

    fn title(&self) -> &str {
        &self.core().title
    }

    fn author(&self) -> &str {
        &self.core().author
    }

    fn publish(&mut self) {
        self.core_mut().published = true;
    }

    fn is_published(&self) -> bool {
        self.core().published
    }
}

// =============================================================================
// Milestone 2: Assignment with guarded due date
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Assignment {
    core: ContentCore,
    due_date: Option<NaiveDate>,
}

impl Assignment {
    fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            core: ContentCore::new(title, author),
            due_date: None,
        }
    }

    fn set_due_date(&mut self, due_date: NaiveDate, is_instructor: bool) -> Result<(), ContentError> {
        if !is_instructor {
            return Err(ContentError::NotInstructor);
        }
        if self.is_published() {
            return Err(ContentError::AlreadyPublished);
        }
        self.due_date = Some(due_date);
        Ok(())
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

impl Content for Assignment {
    fn core(&self) -> &ContentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ContentCore {
        &mut self.core
    }

    fn content_type(&self) -> &'static str {
        "Assignment"
    }
}

fn describe(content: &dyn Content) -> Vec<String> {
    vec![
        format!("Title: {}", content.title()),
        format!("Author: {}", content.author()),
        format!("Type: {}", content.content_type()),
    ]
}

fn main() -> Result<(), ContentError> {
    case_studies::bootstrap("Case study 17: content");

    let due = NaiveDate::from_ymd_opt(2026, 2, 14).expect("valid literal date");

    let mut obj = Assignment::new("Digital Watermarking", "Nilashis Saha");
    obj.set_due_date(due, true)?;

    for line in describe(&obj) {
        println!("{line}");
    }
    match obj.due_date() {
        Some(date) => println!("Due Date: {date}"),
        None => println!("Due Date: none"),
    }

    obj.publish();
    if let Err(err) = obj.set_due_date(due, true) {
        tracing::warn!("{err}");
    }

    Ok(())
}
