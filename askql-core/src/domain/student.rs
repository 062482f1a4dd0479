// askql-core/src/domain/student.rs

use serde::{Deserialize, Serialize};

pub const TABLE_NAME: &str = "STUDENT";
pub const COLUMNS: [&str; 4] = ["NAME", "CLASS", "SECTION", "MARKS"];

pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS STUDENT (
    NAME TEXT,
    CLASS TEXT,
    SECTION TEXT,
    MARKS INTEGER
)";

pub const COUNT_SQL: &str = "SELECT COUNT(*) FROM STUDENT";

pub const INSERT_SQL: &str = "INSERT INTO STUDENT VALUES (?, ?, ?, ?)";

/// One row of the STUDENT table. No identifier and no uniqueness: two
/// identical records are two rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub class: String,
    pub section: String,
    pub marks: i32,
}

impl Student {
    pub fn new(name: &str, class: &str, section: &str, marks: i32) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            section: section.to_string(),
            marks,
        }
    }
}

/// Rows inserted the first time the table is found empty.
pub fn seed_students() -> Vec<Student> {
    vec![
        Student::new("Ashutosh", "Gen AI", "A", 90),
        Student::new("Anupam", "DGen AI", "B", 100),
        Student::new("Evanjilin", "Power BI", "A", 86),
        Student::new("Nidhi", "Web DevOps", "A", 50),
        Student::new("Parshvi", "Power BI", "A", 35),
    ]
}

/// `STUDENT(NAME, CLASS, SECTION, MARKS)`, as shown to the model.
pub fn schema_reminder() -> String {
    format!("{}({})", TABLE_NAME, COLUMNS.join(", "))
}
