use strum::{Display, EnumIter, EnumString};

/// Commands recognized by the shell.
///
/// Keywords are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Keyword {
    Add,
    #[strum(to_string = "search", serialize = "find")]
    Search,
    #[strum(to_string = "remove", serialize = "delete")]
    Remove,
    List,
    Save,
    Load,
    Help,
    #[strum(to_string = "exit", serialize = "quit")]
    Exit,
}

impl Keyword {
    /// Argument synopsis shown in usage errors and `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Add => "add <name> <roll number> <grade>",
            Self::Search => "search <roll number>",
            Self::Remove => "remove <roll number>",
            Self::List => "list",
            Self::Save => "save [path]",
            Self::Load => "load [path]",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub(crate) fn invalid_input_message(self) -> &'static str {
        match self {
            Self::Add => "Invalid input. Please enter valid information.",
            _ => "Invalid input. Please enter a valid roll number.",
        }
    }
}
