use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::shell::Keyword;

/// Errors surfaced by the record store, the persistence layer and the shell.
///
/// Every failure is returned to the caller; nothing is logged and discarded.
/// I/O failures and malformed files are separate variants so callers can
/// tell "the file could not be read" apart from "the file is not ours".
#[derive(Debug, Error, Diagnostic)]
pub enum RollcallError {
    /// The destination or source could not be opened, read or written.
    #[error("IO Error on {}", .path.display())]
    #[diagnostic(
        code(rollcall::io),
        help("check that the path exists and that you have permission to use it")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but does not hold a student file this build understands.
    #[error("{} is not a valid student file", .path.display())]
    #[diagnostic(
        code(rollcall::format),
        help("the file may be corrupt, truncated, or written by a newer version")
    )]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Text typed by the user could not be turned into record fields.
    #[error("{}", .keyword.invalid_input_message())]
    #[diagnostic(code(rollcall::input))]
    InvalidInput {
        keyword: Keyword,
        #[source]
        source: ParseError,
    },

    #[error("Unknown command: {0}")]
    #[diagnostic(code(rollcall::command), help("type `help` to list the commands"))]
    UnknownCommand(String),

    #[error("usage: {}", .keyword.usage())]
    #[diagnostic(code(rollcall::usage))]
    Usage { keyword: Keyword },
}

/// Reasons a blob fails to decode as a student file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("bad magic bytes {found:?}")]
    BadMagic { found: Vec<u8> },

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u16),

    #[error("unexpected end of data: needed {needed} byte(s) at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    #[error("grade at offset {offset} is not a valid character ({value:#x})")]
    InvalidGrade { offset: usize, value: u32 },

    #[error("name at offset {offset} is not valid UTF-8")]
    InvalidName { offset: usize },

    #[error("{0} trailing byte(s) after the last record")]
    TrailingBytes(usize),
}

/// Reasons user-supplied text cannot become a typed field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("`{0}` is not a valid roll number")]
    InvalidRollNumber(String),

    #[error("a grade must be at least one character")]
    MissingGrade,
}
