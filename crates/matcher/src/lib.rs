//! # patclass matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` owns the compiled classification queries and evaluates them
//! against raw `PATDOC` markup. It answers two questions per document: did any
//! wanted classification match, and which query (and which of its field
//! locations) was responsible.
//!
//! Evaluation never builds a document tree. A [`PatternSet`] knows the
//! distinct field paths its queries read; the scanner in [`scan`] walks the
//! document once and collects the text at those paths, then queries are
//! tried in order against the collected values. Cost grows with document
//! size plus query count.
//!
//! ## Core Types
//!
//! - [`PatternSet`]: ordered queries compiled from a wanted-classification
//!   list (CPC first, then USPC, input order within each scheme). Immutable
//!   and shareable across threads.
//! - [`MatchResult`] / [`MatchHit`]: owned outcome of one evaluation: query
//!   index, alternative index, field location, and the matching value.
//! - [`Trigger`]: borrowed view of the query that fired; its `Display` is the
//!   anchored path expression.
//! - [`Matcher`]: a shared pattern set plus the last result, for callers that
//!   ask "what matched" after the fact.
//!
//! ## Example Usage
//!
//! ```
//! use classification::{ClassificationCode, CpcCode};
//! use matcher::Matcher;
//!
//! let wanted = [ClassificationCode::from(CpcCode::new("H", "04", "N", "21"))];
//! let mut matcher = Matcher::compile(&wanted).expect("valid codes");
//!
//! let doc = "<PATDOC><SDOBI><B500><B510><B516><PDAT>H04N2199</PDAT></B516>\
//!            </B510></B500></SDOBI></PATDOC>";
//! assert!(matcher.evaluate(doc));
//! assert_eq!(
//!     matcher.last_triggering_pattern().unwrap().to_string(),
//!     "/PATDOC/SDOBI/B500/B510/B516[starts-with(PDAT, 'H04N21')]"
//! );
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-document latency and outcomes. Compilation and per-document
//! results are also logged through `tracing` (`info` and `debug`).

pub mod engine;
pub mod metrics;
pub mod pattern_set;
pub mod scan;
pub mod types;

#[doc(hidden)]
pub mod demo_utils;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::pattern_set::PatternSet;
pub use crate::scan::{scan_fields, FieldValues};
pub use crate::types::{MatchHit, MatchResult, Trigger};
