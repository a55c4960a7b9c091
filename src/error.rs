use crate::geometry::Point;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a word list or board file
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing a bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be deserialized")]
    DictionaryDeserializeError(String),

    /// A point outside the board was addressed
    #[error("{point} is outside the board")]
    OutOfBounds { point: Point },

    /// Attempt to place a tile on a square that already has one
    #[error("Cannot place tile '{letter}' at {point}: the square is occupied")]
    SquareOccupied { letter: char, point: Point },

    /// Tiles on the board form a letter run that is not an affix of any
    /// dictionary word
    #[error("\"{affix}\" is not a valid {kind} of any word in the dictionary")]
    InvalidAffix { affix: String, kind: AffixKind },

    /// Move tiles are neither row- nor column-aligned
    #[error("The move is invalid: tiles must be placed in a straight line")]
    InvalidMoveShape,

    /// A formed word is missing from the dictionary (only raised when
    /// scoring with validity checking on)
    #[error("\"{0}\" is not a valid word")]
    UnknownWord(String),

    /// Error parsing a board square token
    #[error("Invalid board square: \"{0}\"")]
    InvalidSquare(String),

    /// Board rows must all have the same number of squares
    #[error("Invalid length {found} for board row {row} (expect {expected})")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The board file contained no squares
    #[error("The board is empty")]
    EmptyBoard,

    /// A rack letter that is not a-z or the blank marker
    #[error("Invalid rack letter '{0}'")]
    InvalidLetter(char),

    /// Unknown policy option name
    #[error("Unknown strategy option \"{0}\"")]
    UnknownStrategy(String),

    /// The worker pool could not be started
    #[cfg(feature = "rayon")]
    #[error("Could not start the worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Which side of a word an affix sits on. Only used in error reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

impl std::fmt::Display for AffixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AffixKind::Prefix => write!(f, "prefix"),
            AffixKind::Suffix => write!(f, "suffix"),
        }
    }
}
