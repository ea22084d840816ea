//! Persistence for the record sequence.
//!
//! A save writes one blob per file (see [`codec`]) and a load reads it back
//! verbatim. Callers decide what to do with the loaded records;
//! [`RecordStore::load_from`](crate::RecordStore::load_from) swaps them in
//! only when the load succeeds.

pub mod codec;

use std::{
    ffi::OsString,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{RollcallError, StudentRecord};

/// Writes `records` to `destination`, overwriting any existing content.
///
/// The blob is written to a sibling `.tmp` file, synced, then renamed over the
/// destination, so a failed save leaves the previous file in place.
pub fn save<P: AsRef<Path>>(records: &[StudentRecord], destination: P) -> Result<(), RollcallError> {
    let destination = destination.as_ref();
    let io_error = |source: std::io::Error| RollcallError::Io {
        path: destination.to_path_buf(),
        source,
    };

    let bytes = codec::encode(records);
    let tmp_path = tmp_path_for(destination);

    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });

    if let Err(err) = written.and_then(|()| fs::rename(&tmp_path, destination)) {
        fs::remove_file(&tmp_path).ok();
        return Err(io_error(err));
    }

    info!(
        path = %destination.display(),
        records = records.len(),
        bytes = bytes.len(),
        "saved students"
    );
    Ok(())
}

/// Reads the records stored in `source`.
///
/// Returns [`RollcallError::Io`] when the file cannot be read and
/// [`RollcallError::Format`] when its contents do not decode.
pub fn load<P: AsRef<Path>>(source: P) -> Result<Vec<StudentRecord>, RollcallError> {
    let source = source.as_ref();

    let bytes = fs::read(source).map_err(|source_err| RollcallError::Io {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    debug!(path = %source.display(), bytes = bytes.len(), "read student file");

    let records = codec::decode(&bytes).map_err(|format_err| RollcallError::Format {
        path: source.to_path_buf(),
        source: format_err,
    })?;

    info!(path = %source.display(), records = records.len(), "loaded students");
    Ok(records)
}

fn tmp_path_for(destination: &Path) -> PathBuf {
    let mut name = OsString::from(destination.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::FormatError;

    fn sample() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new("Alice", 1, 'A'),
            StudentRecord::new("Bob", 2, 'B'),
            StudentRecord::new("Alice Again", 1, 'C'),
        ]
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().expect("Temp dir to be created");
        let path = dir.path().join("students.dat");

        save(&sample(), &path).expect("Save to succeed");
        let loaded = load(&path).expect("Load to succeed");

        assert_eq!(loaded, sample());
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().expect("Temp dir to be created");
        let path = dir.path().join("students.dat");

        save(&sample(), &path).expect("First save to succeed");
        save(&sample()[1..2], &path).expect("Second save to succeed");

        assert_eq!(load(&path).expect("Load to succeed"), vec![StudentRecord::new("Bob", 2, 'B')]);
    }

    #[test]
    fn test_save_to_missing_directory_is_io_error() {
        let dir = TempDir::new().expect("Temp dir to be created");
        let path = dir.path().join("no_such_dir").join("students.dat");

        let err = save(&sample(), &path).unwrap_err();
        match err {
            RollcallError::Io { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().expect("Temp dir to be created");
        let err = load(dir.path().join("missing.dat")).unwrap_err();

        match err {
            RollcallError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_corrupt_file_is_format_error() {
        let dir = TempDir::new().expect("Temp dir to be created");
        let path = dir.path().join("students.dat");

        let mut bytes = codec::encode(&sample());
        bytes.truncate(bytes.len() - 2);
        fs::write(&path, &bytes).expect("Write to succeed");

        match load(&path).unwrap_err() {
            RollcallError::Format { source, .. } => {
                assert!(matches!(source, FormatError::Truncated { .. }))
            }
            other => panic!("Expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_foreign_file_is_format_error() {
        let dir = TempDir::new().expect("Temp dir to be created");
        let path = dir.path().join("notes.txt");
        fs::write(&path, "Name: Alice, Roll Number: 1, Grade: A\n").expect("Write to succeed");

        match load(&path).unwrap_err() {
            RollcallError::Format { source, .. } => {
                assert!(matches!(source, FormatError::BadMagic { .. }))
            }
            other => panic!("Expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_tmp_path_keeps_extension() {
        assert_eq!(
            tmp_path_for(Path::new("data/students.dat")),
            PathBuf::from("data/students.dat.tmp")
        );
    }
}
