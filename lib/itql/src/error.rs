use mulgara_model::{IriParseError, QueryError};
use thiserror::Error;

pub type ItqlResult<T> = Result<T, ItqlError>;

/// An error that occurred while turning a parsed ITQL command into a query or command.
#[derive(Debug, Error)]
pub enum ItqlError {
    /// A resource token that is not a valid IRI, also after alias substitution.
    #[error("Malformed reference {text}: {error}")]
    MalformedReference {
        text: String,
        #[source]
        error: IriParseError,
    },
    /// A semantic error in the command.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// The syntax tree violates a guarantee of the grammar, e.g. a non-numeric limit.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ItqlError {
    pub(crate) fn malformed(text: impl Into<String>, error: IriParseError) -> Self {
        ItqlError::MalformedReference {
            text: text.into(),
            error,
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        ItqlError::Internal(message.into())
    }

    /// Returns the semantic query error, if this is one.
    pub fn as_query_error(&self) -> Option<&QueryError> {
        match self {
            ItqlError::Query(error) => Some(error),
            _ => None,
        }
    }
}
