use std::fmt;

use pathquery::{AlternativeExpr, FieldLocation, PathQuery, PrefixTest};
use serde::Serialize;

/// Which compiled query satisfied a document, and how.
///
/// Indexes refer to the [`PatternSet`](crate::PatternSet) that produced the
/// hit; resolve them with [`PatternSet::trigger`](crate::PatternSet::trigger).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchHit {
    /// Position of the query in the pattern set.
    pub query_index: usize,
    /// Position of the alternative inside that query.
    pub alternative_index: usize,
    pub location: FieldLocation,
    /// Field value that carried the wanted prefix, verbatim.
    pub value: String,
}

/// Outcome of evaluating a pattern set against one document.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MatchResult {
    pub hit: Option<MatchHit>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self { hit: None }
    }

    pub fn matched(&self) -> bool {
        self.hit.is_some()
    }
}

/// Borrowed view of the query that fired, for explanations.
#[derive(Debug, Clone, Copy)]
pub struct Trigger<'a> {
    query: &'a PathQuery,
    hit: &'a MatchHit,
}

impl<'a> Trigger<'a> {
    pub(crate) fn new(query: &'a PathQuery, hit: &'a MatchHit) -> Self {
        Self { query, hit }
    }

    pub fn query(&self) -> &'a PathQuery {
        self.query
    }

    pub fn hit(&self) -> &'a MatchHit {
        self.hit
    }

    pub fn alternative(&self) -> &'a PrefixTest {
        &self.query.alternatives()[self.hit.alternative_index]
    }

    pub fn location(&self) -> FieldLocation {
        self.hit.location
    }

    /// Anchored expression of the alternative that fired.
    pub fn expr(&self) -> AlternativeExpr<'a> {
        AlternativeExpr::new(self.query.anchor(), self.alternative())
    }
}

impl fmt::Display for Trigger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr().fmt(f)
    }
}
