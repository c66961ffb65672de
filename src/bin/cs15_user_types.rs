// Case study 15: unions, read-only views and mapped types
//
// Types only, so the demo just builds a few values and prints them.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
struct Learner {
    id: String,
    quizzes_completed: u32,
}

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
struct Instructor {
    id: String,
    courses_taught: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessLevel {
    Basic,
    Super,
}

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
struct Admin {
    id: String,
    access_level: AccessLevel,
}

#[derive(Debug, Clone, PartialEq)]
enum InstructorOrAdmin {
    Instructor(Instructor),
    Admin(Admin),
}

impl InstructorOrAdmin {
    fn id(&self) -> &str {
        match self {
            InstructorOrAdmin::Instructor(instructor) => &instructor.id,
            InstructorOrAdmin::Admin(admin) => &admin.id,
        }
    }
}

// =============================================================================
// Read-only view
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Assignment {
    title: String,
    due_date: NaiveDate,
    points: u32,
}

/// Fields are reachable through getters only.
#[derive(Debug, Clone, PartialEq)]
struct ReadonlyAssignment(Assignment);

impl ReadonlyAssignment {
    fn title(&self) -> &str {
        &self.0.title
    }

    fn due_date(&self) -> NaiveDate {
        self.0.due_date
    }

    fn points(&self) -> u32 {
        self.0.points
    }
}

impl From<Assignment> for ReadonlyAssignment {
    fn from(assignment: Assignment) -> Self {
        Self(assignment)
    }
}

// =============================================================================
// Mapped type: same keys, string values
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LearnerStats {
    quizzes: u32,
    videos: u32,
    assignments: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StatsAsStrings {
    quizzes: String,
    videos: String,
    assignments: String,
}

impl From<LearnerStats> for StatsAsStrings {
    fn from(stats: LearnerStats) -> Self {
        Self {
            quizzes: stats.quizzes.to_string(),
            videos: stats.videos.to_string(),
            assignments: stats.assignments.to_string(),
        }
    }
}

fn main() {
    case_studies::bootstrap("Case study 15: user types");

    let learner = Learner {
        id: "L1".into(),
        quizzes_completed: 4,
    };
    println!("{learner:?}");

    let staff = [
        InstructorOrAdmin::Instructor(Instructor {
            id: "I1".into(),
            courses_taught: 3,
        }),
        InstructorOrAdmin::Admin(Admin {
            id: "A1".into(),
            access_level: AccessLevel::Super,
        }),
    ];
    for member in &staff {
        println!("{} -> {member:?}", member.id());
    }

    let due_date = NaiveDate::from_ymd_opt(2026, 2, 14).expect("valid literal date");
    let assignment = ReadonlyAssignment::from(Assignment {
        title: "Digital Watermarking".into(),
        due_date,
        points: 100,
    });
    println!(
        "{} due {} worth {} points",
        assignment.title(),
        assignment.due_date(),
        assignment.points()
    );

    let stats = StatsAsStrings::from(LearnerStats {
        quizzes: 5,
        videos: 12,
        assignments: 3,
    });
    println!("{stats:?}");
}
