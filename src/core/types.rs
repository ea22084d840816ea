/// Key used to look students up in a [`RecordStore`](crate::RecordStore).
///
/// A 32-bit signed integer. Nothing enforces uniqueness: several records may
/// share a roll number.
pub type RollNumber = i32;
