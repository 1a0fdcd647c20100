use std::fmt;
use std::sync::Arc;

use classification::ClassificationCode;
use matcher::{MatchResult, Matcher, PatternSet, Trigger};
use pathquery::FieldLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn, Level};

use crate::config::PatclassConfig;
use crate::error::CorpusMatchError;

/// Document family of a bound document.
///
/// Recorded for logging only: query anchors are the same for every family,
/// so applications are checked at the citation locations too even though
/// they never carry citation data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Granted patent.
    Grant,
    /// Published application.
    Application,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Grant => f.write_str("grant"),
            DocumentKind::Application => f.write_str("application"),
        }
    }
}

/// Lifecycle position of a [`ClassificationMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// `setup` has not succeeded yet.
    Uninitialized,
    /// Queries compiled, no document bound.
    Ready,
    /// Queries compiled and a document bound.
    Bound,
}

/// Why the last matched document matched, or that it did not.
///
/// `Display` gives the anchored path expression of the alternative that
/// fired, or `no match`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Explanation {
    NoMatch,
    Matched {
        code: ClassificationCode,
        location: FieldLocation,
        expression: String,
        value: String,
    },
}

impl Explanation {
    /// Textual form used when nothing matched.
    pub const NO_MATCH: &'static str = "no match";

    pub fn from_trigger(trigger: Option<Trigger<'_>>) -> Self {
        match trigger {
            Some(trigger) => Explanation::Matched {
                code: trigger.query().code().clone(),
                location: trigger.location(),
                expression: trigger.to_string(),
                value: trigger.hit().value.clone(),
            },
            None => Explanation::NoMatch,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Explanation::Matched { .. })
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Explanation::NoMatch => f.write_str(Self::NO_MATCH),
            Explanation::Matched { expression, .. } => f.write_str(expression),
        }
    }
}

/// Contract between a document matcher and the corpus pipeline that feeds it.
///
/// The pipeline calls `setup` once, then for each candidate document
/// `bind`, `is_match` and, for logging, `explain`.
pub trait CorpusMatch {
    /// Compile the matcher's queries. Calling it again recompiles.
    fn setup(&mut self) -> Result<(), CorpusMatchError>;

    /// Attach the next document, discarding any previous result.
    fn bind(&mut self, document: String, kind: DocumentKind);

    /// Evaluate the bound document.
    fn is_match(&mut self) -> Result<bool, CorpusMatchError>;

    /// Explain the most recent `is_match` result.
    fn explain(&self) -> Explanation;
}

#[derive(Debug, Clone)]
struct Binding {
    document: String,
    kind: DocumentKind,
}

/// Matches documents by the CPC/USPC classifications recorded in their
/// markup, without building a document model.
///
/// ```
/// use classification::{ClassificationCode, UspcCode};
/// use patclass::{ClassificationMatch, CorpusMatch, DocumentKind};
///
/// let mut m = ClassificationMatch::new(vec![ClassificationCode::from(UspcCode::new("705"))]);
/// m.setup().unwrap();
///
/// m.bind(
///     "<PATDOC><SDOBI><B500><B520><B521><PDAT>705123</PDAT></B521></B520></B500></SDOBI></PATDOC>"
///         .to_string(),
///     DocumentKind::Grant,
/// );
/// assert!(m.is_match().unwrap());
/// assert_eq!(
///     m.explain().to_string(),
///     "/PATDOC/SDOBI/B500/B520/B521[starts-with(PDAT, '705')]"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ClassificationMatch {
    wanted: Arc<[ClassificationCode]>,
    matcher: Option<Matcher>,
    binding: Option<Binding>,
}

impl ClassificationMatch {
    pub fn new(wanted: Vec<ClassificationCode>) -> Self {
        Self {
            wanted: wanted.into(),
            matcher: None,
            binding: None,
        }
    }

    /// Build an un-setup matcher for the classifications in `config`.
    pub fn from_config(config: &PatclassConfig) -> Self {
        Self::new(config.wanted.clone())
    }

    pub fn wanted(&self) -> &[ClassificationCode] {
        &self.wanted
    }

    /// Compiled queries, once `setup` has succeeded.
    pub fn patterns(&self) -> Option<&Arc<PatternSet>> {
        self.matcher.as_ref().map(Matcher::patterns)
    }

    pub fn state(&self) -> MatchState {
        match (&self.matcher, &self.binding) {
            (None, _) => MatchState::Uninitialized,
            (Some(_), None) => MatchState::Ready,
            (Some(_), Some(_)) => MatchState::Bound,
        }
    }

    /// A matcher for another worker: same compiled queries, nothing bound.
    pub fn fork(&self) -> Self {
        Self {
            wanted: Arc::clone(&self.wanted),
            matcher: self.matcher.as_ref().map(Matcher::fork),
            binding: None,
        }
    }

    /// Structured view of the query that fired for the last document.
    pub fn last_match_pattern(&self) -> Option<Trigger<'_>> {
        self.matcher
            .as_ref()
            .and_then(Matcher::last_triggering_pattern)
    }

    /// Evaluate `document` without binding it. Leaves this matcher's own
    /// bound document and last result untouched, so a set-up matcher can be
    /// shared by reference across threads.
    pub fn match_document(
        &self,
        document: &str,
        kind: DocumentKind,
    ) -> Result<MatchResult, CorpusMatchError> {
        let matcher = self.matcher.as_ref().ok_or(CorpusMatchError::NotSetUp)?;
        let span = tracing::span!(Level::DEBUG, "corpus_match.match_document", kind = %kind);
        let _guard = span.enter();
        Ok(matcher.match_document(document))
    }
}

impl CorpusMatch for ClassificationMatch {
    fn setup(&mut self) -> Result<(), CorpusMatchError> {
        match PatternSet::compile(&self.wanted) {
            Ok(patterns) => {
                info!(
                    wanted = self.wanted.len(),
                    queries = patterns.len(),
                    "setup_success"
                );
                self.matcher = Some(Matcher::new(patterns));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "setup_failure");
                self.matcher = None;
                Err(err.into())
            }
        }
    }

    fn bind(&mut self, document: String, kind: DocumentKind) {
        debug!(kind = %kind, bytes = document.len(), "document_bound");
        if let Some(matcher) = self.matcher.as_mut() {
            matcher.reset();
        }
        self.binding = Some(Binding { document, kind });
    }

    fn is_match(&mut self) -> Result<bool, CorpusMatchError> {
        let matcher = self.matcher.as_mut().ok_or(CorpusMatchError::NotSetUp)?;
        let binding = self
            .binding
            .as_ref()
            .ok_or(CorpusMatchError::NoDocumentBound)?;

        let span = tracing::span!(Level::DEBUG, "corpus_match.is_match", kind = %binding.kind);
        let _guard = span.enter();
        Ok(matcher.evaluate(&binding.document))
    }

    fn explain(&self) -> Explanation {
        Explanation::from_trigger(self.last_match_pattern())
    }
}

impl fmt::Display for ClassificationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patterns() {
            Some(patterns) => write!(
                f,
                "ClassificationMatch [wanted={}, queries={}]",
                self.wanted().len(),
                patterns.len()
            ),
            None => write!(
                f,
                "ClassificationMatch [wanted={}, not set up]",
                self.wanted().len()
            ),
        }
    }
}
