// Evaluation metrics for the `matcher` crate.
//
// One process-wide recorder, installed with [`set_match_metrics`]. Each
// [`Matcher::evaluate`](crate::Matcher::evaluate) reports pattern-set size,
// the matched scheme and latency to it. No recorder means no overhead beyond
// a read lock.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use classification::Scheme;
use once_cell::sync::OnceCell;

/// Metrics observer for document evaluations.
pub trait MatchMetrics: Send + Sync {
    /// Record one evaluation.
    ///
    /// `query_count` is the size of the pattern set that was evaluated,
    /// `matched_scheme` is the scheme of the triggering query (`None` when
    /// nothing matched) and `latency` covers scanning plus query evaluation.
    fn record_evaluation(&self, query_count: usize, matched_scheme: Option<Scheme>, latency: Duration);
}

type RecorderSlot = RwLock<Option<Arc<dyn MatchMetrics>>>;

static RECORDER: OnceCell<RecorderSlot> = OnceCell::new();

fn recorder_slot() -> &'static RecorderSlot {
    RECORDER.get_or_init(RecorderSlot::default)
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    recorder_slot()
        .read()
        .map(|slot| slot.clone())
        .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
}

/// Install or clear the global match metrics recorder.
///
/// Usually called once at startup so every `Matcher` reports to the same
/// backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut slot = recorder_slot()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = recorder;
}
