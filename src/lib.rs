pub(crate) mod common;
pub mod config;
pub(crate) mod core;
pub(crate) mod db;
pub mod shell;
pub mod storage;

pub use common::error::{FormatError, ParseError, RollcallError};
pub use config::Config;
pub use crate::core::types::RollNumber;
pub use db::{record::StudentRecord, store::RecordStore};
