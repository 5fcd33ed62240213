use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use sequin_kind::Kind;

/// The operation that raised an error, as it is spelled in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Average,
    Max,
    Min,
    Sum,
    First,
    Last,
}

impl Operation {
    /// Aggregates compute a value over all elements.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Operation::Average | Operation::Max | Operation::Min | Operation::Sum
        )
    }
}

/// Sequence error.
///
/// The messages are part of the contract; callers may match on them.
#[derive(Debug, Clone, PartialEq, Error, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Elements of different kinds in one sequence.
    ///
    /// Raised by construction and by every operation that builds a sequence
    /// out of new elements.
    #[error(
        "Collection items must be of the same type. Expected \"{expected}\", got \"{actual}\" at index {index}."
    )]
    TypeInconsistency {
        expected: Kind,
        actual: Kind,
        index: usize,
    },
    /// The operation needs at least one element.
    #[error("{}", empty_message(.0))]
    EmptyCollection(Operation),
    /// The operation needs numeric elements.
    #[error("Cannot calculate {0} of non-numeric values")]
    NonNumeric(Operation),
    #[error("Index {index} is out of bounds for collection of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },
    #[error("No item found that matches the condition")]
    NoMatch,
    #[error("Expected exactly one item, found {0}")]
    MultipleMatches(usize),
    /// JSON text could not be turned into a sequence.
    #[error("Invalid JSON: {0}")]
    ParseError(String),
    /// A parameter that makes no sense, such as a negative count.
    #[error("{0}")]
    InvalidArgument(String),
}

fn empty_message(operation: &Operation) -> String {
    if operation.is_aggregate() {
        format!("Cannot calculate {} of an empty collection", operation)
    } else {
        "Collection is empty".to_string()
    }
}

impl Error {
    /// A stable identifier for the kind of error, independent of its details.
    pub fn code(&self) -> &str {
        self.as_ref()
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

impl From<json::Error> for Error {
    fn from(e: json::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
