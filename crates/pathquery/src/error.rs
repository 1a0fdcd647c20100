use classification::Scheme;
use thiserror::Error;

/// Errors raised while compiling a classification code into a query.
///
/// Both variants are non-recoverable for the offending code. Callers decide
/// whether to abort the whole wanted list (the default in `patclass`) or to
/// skip the code and continue.
///
/// ```rust
/// use classification::CpcCode;
/// use pathquery::{build_cpc_query, BuildError};
///
/// let err = build_cpc_query(&CpcCode::new("H", "04", "N", "")).unwrap_err();
/// assert!(matches!(err, BuildError::EmptyField { field: "main_group", .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// A required field is empty or whitespace-only.
    #[error("{scheme} code '{code}' has an empty {field} field")]
    EmptyField {
        scheme: Scheme,
        field: &'static str,
        code: String,
    },
    /// A field contains a single quote, which cannot appear inside the quoted
    /// prefix literal of the rendered expression.
    #[error("{scheme} field {field} contains a quote character: {value:?}")]
    QuoteInField {
        scheme: Scheme,
        field: &'static str,
        value: String,
    },
}
