//! Conversion from user-typed text to record fields.

use crate::{ParseError, RollNumber, StudentRecord};

/// Parses a roll number, allowing surrounding whitespace and a leading sign.
pub fn parse_roll_number(text: &str) -> Result<RollNumber, ParseError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| ParseError::InvalidRollNumber(trimmed.to_owned()))
}

/// Takes the first character of the trimmed text as the grade.
///
/// Anything after the first character is ignored.
pub fn parse_grade(text: &str) -> Result<char, ParseError> {
    text.trim().chars().next().ok_or(ParseError::MissingGrade)
}

/// Builds a record from the three text fields of the add form.
///
/// The name is only trimmed; an empty name is accepted.
pub fn parse_record(name: &str, roll_number: &str, grade: &str) -> Result<StudentRecord, ParseError> {
    Ok(StudentRecord::new(
        name.trim(),
        parse_roll_number(roll_number)?,
        parse_grade(grade)?,
    ))
}
