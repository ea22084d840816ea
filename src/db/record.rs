use std::fmt::Display;

use crate::RollNumber;

/// One student's stored data.
///
/// Records are built with every field present and are never mutated
/// afterwards; the fields are only reachable through accessors.
///
/// # Example
///
/// ```
/// use rollcall::StudentRecord;
///
/// let alice = StudentRecord::new("Alice", 1, 'A');
/// assert_eq!(alice.roll_number(), 1);
/// assert_eq!(alice.to_string(), "Name: Alice, Roll Number: 1, Grade: A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentRecord {
    name: String,
    roll_number: RollNumber,
    grade: char,
}

impl StudentRecord {
    /// Creates a new record from fully specified fields.
    pub fn new(name: impl Into<String>, roll_number: RollNumber, grade: char) -> Self {
        Self {
            name: name.into(),
            roll_number,
            grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> RollNumber {
        self.roll_number
    }

    pub fn grade(&self) -> char {
        self.grade
    }
}

impl Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Roll Number: {}, Grade: {}",
            self.name, self.roll_number, self.grade
        )
    }
}
