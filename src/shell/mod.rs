//! Line-oriented front end over a [`RecordStore`].
//!
//! The shell parses one command per line, runs it against the store and
//! renders the result as text. It holds no state besides the store and the
//! default data file.

pub mod fields;
mod keyword;

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use strum::IntoEnumIterator;

pub use keyword::Keyword;

use crate::{Config, ParseError, RecordStore, RollNumber, RollcallError, StudentRecord};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(StudentRecord),
    Search(RollNumber),
    Remove(RollNumber),
    List,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Help,
    Exit,
}

impl Command {
    /// Parses a single input line.
    ///
    /// Returns `Ok(None)` for a blank line. For `add`, the last two words are
    /// the roll number and grade and everything before them is the name. For
    /// `save` and `load`, the rest of the line is taken as the path.
    pub fn parse(line: &str) -> Result<Option<Self>, RollcallError> {
        let line = line.trim();
        let mut words = line.split_whitespace();

        let Some(first) = words.next() else {
            return Ok(None);
        };

        let keyword = Keyword::from_str(first)
            .map_err(|_| RollcallError::UnknownCommand(first.to_owned()))?;
        let args = words.collect::<Vec<_>>();
        let rest = line[first.len()..].trim();

        let invalid = |source: ParseError| RollcallError::InvalidInput { keyword, source };

        let command = match (keyword, args.as_slice()) {
            (Keyword::Add, [name @ .., roll_number, grade]) if !name.is_empty() => Self::Add(
                fields::parse_record(&name.join(" "), roll_number, grade).map_err(invalid)?,
            ),
            (Keyword::Search, [roll_number]) => {
                Self::Search(fields::parse_roll_number(roll_number).map_err(invalid)?)
            }
            (Keyword::Remove, [roll_number]) => {
                Self::Remove(fields::parse_roll_number(roll_number).map_err(invalid)?)
            }
            (Keyword::List, []) => Self::List,
            (Keyword::Save, _) => Self::Save(optional_path(rest)),
            (Keyword::Load, _) => Self::Load(optional_path(rest)),
            (Keyword::Help, []) => Self::Help,
            (Keyword::Exit, []) => Self::Exit,
            _ => return Err(RollcallError::Usage { keyword }),
        };

        Ok(Some(command))
    }
}

fn optional_path(rest: &str) -> Option<PathBuf> {
    (!rest.is_empty()).then(|| PathBuf::from(rest))
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show to the user.
    Message(String),

    /// Blank input, nothing to show.
    Nothing,

    /// The user asked to leave.
    Exit,
}

/// Interactive session state: the store plus the default data file.
#[derive(Debug)]
pub struct Shell {
    store: RecordStore,
    data_file: PathBuf,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self::with_store(RecordStore::new(), config)
    }

    pub fn with_store(store: RecordStore, config: &Config) -> Self {
        Self {
            store,
            data_file: config.data_file.clone(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Parses and runs one line of input.
    ///
    /// Errors are returned untouched; the store is unchanged when an error
    /// is returned.
    pub fn execute(&mut self, line: &str) -> Result<Reply, RollcallError> {
        match Command::parse(line)? {
            Some(command) => self.run(command),
            None => Ok(Reply::Nothing),
        }
    }

    /// Runs an already parsed command.
    pub fn run(&mut self, command: Command) -> Result<Reply, RollcallError> {
        let message = match command {
            Command::Add(record) => {
                self.store.add(record);
                "Student added successfully.".to_owned()
            }
            Command::Search(roll_number) => match self.store.find_by_key(roll_number) {
                Some(record) => format!("Student found: {record}"),
                None => "Student not found.".to_owned(),
            },
            Command::Remove(roll_number) => {
                let removed = self.store.remove_by_key(roll_number);
                format!("Removed {removed} student(s).")
            }
            Command::List => render_list(&self.store),
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| self.data_file.clone());
                self.store.save_to(&path)?;
                format!("Saved {} student(s) to {}.", self.store.len(), path.display())
            }
            Command::Load(path) => {
                let path = path.unwrap_or_else(|| self.data_file.clone());
                let loaded = self.store.load_from(&path)?;
                format!("Loaded {loaded} student(s) from {}.", path.display())
            }
            Command::Help => help_text(),
            Command::Exit => return Ok(Reply::Exit),
        };

        Ok(Reply::Message(message))
    }
}

fn render_list(store: &RecordStore) -> String {
    if store.is_empty() {
        return "No students available.".to_owned();
    }

    let mut message = String::from("All Students:");
    for record in store {
        message.push('\n');
        message.push_str(&record.to_string());
    }
    message
}

fn help_text() -> String {
    let mut text = String::from("Commands:");
    for keyword in Keyword::iter() {
        text.push_str("\n  ");
        text.push_str(keyword.usage());
    }
    text
}
