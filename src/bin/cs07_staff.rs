// Case study 7: enums as closed sets of labels

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Doctor,
    Nurse,
    Admin,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Staff {
    id: String,
    name: String,
    role: Role,
}

impl Staff {
    fn new(id: &str, name: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
        }
    }
}

fn detail(staff: &Staff) -> String {
    format!("ID: {}, Name: {}, Role: {}", staff.id, staff.name, staff.role)
}

fn summary(staff_members: &[Staff]) -> Vec<String> {
    std::iter::once("Staff Summary:".to_string())
        .chain(staff_members.iter().map(detail))
        .collect()
}

fn main() {
    case_studies::bootstrap("Case study 7: staff roles");

    let staff_members = vec![
        Staff::new("1", "Dr. Nilashis", Role::Doctor),
        Staff::new("2", "Ms. Carla", Role::Nurse),
        Staff::new("3", "Mr. Bob", Role::Admin),
    ];

    for line in summary(&staff_members) {
        println!("{line}");
    }
}
