use std::sync::Arc;
use std::time::Instant;

use classification::ClassificationCode;
use pathquery::BuildError;
use tracing::debug;

use crate::metrics::metrics_recorder;
use crate::pattern_set::PatternSet;
use crate::types::{MatchResult, Trigger};


/// Stateful evaluator: a shared [`PatternSet`] plus the result of the most
/// recent evaluation.
///
/// One `Matcher` serves one stream of documents. Workers that evaluate in
/// parallel each take their own matcher via [`Matcher::fork`]; the compiled
/// pattern set is shared, the last result is not.
#[derive(Debug, Clone)]
pub struct Matcher {
    patterns: Arc<PatternSet>,
    last: MatchResult,
}

impl Matcher {
    pub fn new(patterns: PatternSet) -> Self {
        Self::with_patterns_arc(Arc::new(patterns))
    }

    /// Construct a matcher over an already shared pattern set.
    pub fn with_patterns_arc(patterns: Arc<PatternSet>) -> Self {
        Self {
            patterns,
            last: MatchResult::no_match(),
        }
    }

    /// Compile `wanted` and wrap the result.
    pub fn compile(wanted: &[ClassificationCode]) -> Result<Self, BuildError> {
        PatternSet::compile(wanted).map(Self::new)
    }

    pub fn patterns(&self) -> &Arc<PatternSet> {
        &self.patterns
    }

    /// A matcher sharing this one's pattern set with no evaluation history.
    pub fn fork(&self) -> Self {
        Self::with_patterns_arc(Arc::clone(&self.patterns))
    }

    /// Evaluate `document`, replacing the previous result.
    pub fn evaluate(&mut self, document: &str) -> bool {
        self.last = self.match_document(document);
        self.last.matched()
    }

    /// Evaluate `document` without touching the stored result. Logs and
    /// reports metrics exactly like [`Matcher::evaluate`].
    pub fn match_document(&self, document: &str) -> MatchResult {
        let start = Instant::now();
        let result = self.patterns.evaluate(document);
        let latency = start.elapsed();

        let trigger = result
            .hit
            .as_ref()
            .and_then(|hit| self.patterns.trigger(hit));
        match trigger {
            Some(trigger) => debug!(
                code = %trigger.query().code(),
                location = %trigger.location(),
                value = %trigger.hit().value,
                elapsed_micros = latency.as_micros(),
                "document_matched"
            ),
            None => debug!(
                queries = self.patterns.len(),
                elapsed_micros = latency.as_micros(),
                "document_not_matched"
            ),
        }

        if let Some(recorder) = metrics_recorder() {
            recorder.record_evaluation(
                self.patterns.len(),
                trigger.map(|t| t.query().scheme()),
                latency,
            );
        }

        result
    }

    /// Query and alternative that satisfied the most recent document, or
    /// `None` if it did not match or nothing was evaluated yet.
    pub fn last_triggering_pattern(&self) -> Option<Trigger<'_>> {
        self.last
            .hit
            .as_ref()
            .and_then(|hit| self.patterns.trigger(hit))
    }

    pub fn last_result(&self) -> &MatchResult {
        &self.last
    }

    /// Forget the most recent result.
    pub fn reset(&mut self) {
        self.last = MatchResult::no_match();
    }
}
