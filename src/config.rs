use std::path::PathBuf;

use clap::Parser;

/// File used by `save` and `load` when no path is given.
pub const DEFAULT_DATA_FILE: &str = "students.dat";

/// Runtime configuration for the `rollcall` shell.
///
/// Parsed from the command line, with `ROLLCALL_FILE` as a fallback for the
/// data file.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "rollcall", version, about = "Keep a list of students and save it to a file")]
pub struct Config {
    /// Default file for `save` and `load`.
    #[arg(short = 'f', long = "file", env = "ROLLCALL_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Load the data file before the first prompt.
    #[arg(short, long)]
    pub load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            load: false,
        }
    }
}
