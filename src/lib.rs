#![warn(clippy::all, rust_2018_idioms)]

pub mod classify;
pub mod compare;
pub mod generation;
pub mod phonology;
mod raw_data;
pub mod report;
pub mod segment;
pub mod shape;
pub mod sounds;
pub mod syllable;

pub use classify::{classify, classify_reader};
pub use compare::{compare, Comparison};
pub use generation::generate_possible_syllables;
pub use phonology::Phonology;
pub use shape::{Shape, ShapeTable};
pub use sounds::Inventory;
pub use syllable::{AttestedSyllable, PossibleSyllable};

use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SylError {
    /// A corpus line that does not split into 4 or 5 fields.
    MalformedRecord { line: u64, fields: usize },
    /// A transcription line without a usable onset/nucleus/coda/tone pattern.
    MalformedTranscription { line: u64, reason: String },
    GenericParseError(String),
    Io(String),
}

pub type SylResult<T> = Result<T, SylError>;

impl std::fmt::Display for SylError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SylError::MalformedRecord { line, fields } => write!(
                f,
                "Malformed record on line {} (expected 4 or 5 fields, found {})",
                line, fields
            ),
            SylError::MalformedTranscription { line, reason } => {
                write!(f, "Malformed transcription on line {} ({})", line, reason)
            }
            SylError::GenericParseError(s) => write!(f, "Failed to parse ({})", s),
            SylError::Io(s) => write!(f, "I/O error ({})", s),
        }
    }
}

impl std::error::Error for SylError {}

impl From<std::io::Error> for SylError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<csv::Error> for SylError {
    fn from(value: csv::Error) -> Self {
        match value.kind() {
            csv::ErrorKind::Io(_) => Self::Io(value.to_string()),
            _ => Self::GenericParseError(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for SylError {
    fn from(value: serde_json::Error) -> Self {
        Self::GenericParseError(value.to_string())
    }
}
