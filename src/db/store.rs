use std::path::Path;

use tracing::{debug, warn};

use crate::{RollNumber, RollcallError, StudentRecord, storage};

/// The in-memory owner of the student record sequence.
///
/// `RecordStore` keeps records in insertion order and answers lookups with a
/// linear scan. There is no index and no uniqueness check on roll numbers.
///
/// Mutations either fully apply or leave the store untouched. A failed
/// [`RecordStore::load_from`] keeps the records that were there before.
///
/// # Example
///
/// ```
/// use rollcall::{RecordStore, StudentRecord};
///
/// let mut store = RecordStore::new();
/// store.add(StudentRecord::new("Alice", 1, 'A'));
/// store.add(StudentRecord::new("Bob", 2, 'B'));
///
/// assert_eq!(store.find_by_key(2).map(|r| r.name()), Some("Bob"));
///
/// store.remove_by_key(1);
/// assert_eq!(store.list_all(), vec![StudentRecord::new("Bob", 2, 'B')]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the sequence.
    pub fn add(&mut self, record: StudentRecord) {
        debug!(roll_number = record.roll_number(), "adding student");
        self.records.push(record);
    }

    /// Removes every record with the given roll number.
    ///
    /// Returns how many records were removed. Zero is not an error.
    pub fn remove_by_key(&mut self, roll_number: RollNumber) -> usize {
        let before = self.records.len();
        self.records
            .retain(|record| record.roll_number() != roll_number);

        let removed = before - self.records.len();
        debug!(roll_number, removed, "removed students");
        removed
    }

    /// Returns the first record with the given roll number, in insertion order.
    pub fn find_by_key(&self, roll_number: RollNumber) -> Option<&StudentRecord> {
        self.records
            .iter()
            .find(|record| record.roll_number() == roll_number)
    }

    /// Returns a snapshot of all records in insertion order.
    ///
    /// The returned vector is a copy; later mutations of the store are not
    /// reflected in it.
    pub fn list_all(&self) -> Vec<StudentRecord> {
        self.records.clone()
    }

    /// Iterates over the records in insertion order without copying them.
    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes every record to `destination`, replacing its contents.
    pub fn save_to<P: AsRef<Path>>(&self, destination: P) -> Result<(), RollcallError> {
        storage::save(&self.records, destination)
    }

    /// Replaces the whole sequence with the records stored in `source`.
    ///
    /// On error the current records are kept as they were. Returns the number
    /// of records loaded.
    pub fn load_from<P: AsRef<Path>>(&mut self, source: P) -> Result<usize, RollcallError> {
        match storage::load(&source) {
            Ok(records) => {
                self.records = records;
                Ok(self.records.len())
            }
            Err(err) => {
                warn!(
                    path = %source.as_ref().display(),
                    kept = self.records.len(),
                    "load failed, keeping current students"
                );
                Err(err)
            }
        }
    }
}

impl From<Vec<StudentRecord>> for RecordStore {
    fn from(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
