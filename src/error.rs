use pathquery::BuildError;
use thiserror::Error;

/// Errors surfaced by a [`CorpusMatch`](crate::CorpusMatch) implementation.
///
/// `Build` means the wanted-classification list needs fixing; the other
/// variants are programming errors in the caller and are never swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CorpusMatchError {
    /// A wanted classification could not be compiled; setup was aborted.
    #[error("failed to compile wanted classifications: {0}")]
    Build(#[from] BuildError),
    /// `is_match` called before `setup`.
    #[error("match requested before setup()")]
    NotSetUp,
    /// `is_match` called with no document bound.
    #[error("match requested before a document was bound")]
    NoDocumentBound,
}

impl CorpusMatchError {
    /// True for errors caused by calling the lifecycle out of order.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CorpusMatchError::NotSetUp | CorpusMatchError::NoDocumentBound
        )
    }
}
