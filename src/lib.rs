//! Workspace umbrella crate for patclass.
//!
//! patclass decides whether an SGML `PATDOC` patent document carries one of a
//! set of wanted CPC or USPC classifications. The work is split across the
//! workspace crates and re-exported here so pipeline code depends on a single
//! crate:
//!
//! - `classification`: the wanted-code value types.
//! - `pathquery`: compiles a code into an anchored prefix query over the two
//!   field locations of its scheme.
//! - `matcher`: the compiled [`PatternSet`], the single-pass document scanner
//!   and the stateful [`Matcher`].
//!
//! This crate adds the corpus-facing lifecycle ([`CorpusMatch`],
//! [`ClassificationMatch`]) and YAML configuration ([`PatclassConfig`]).
//!
//! ```
//! use patclass::{ClassificationMatch, CorpusMatch, DocumentKind, PatclassConfig};
//!
//! let config = PatclassConfig::from_yaml(
//!     r#"
//! version: "1"
//! wanted:
//!   - scheme: cpc
//!     section: "H"
//!     main_class: "04"
//!     sub_class: "N"
//!     main_group: "21"
//! "#,
//! )
//! .unwrap();
//!
//! let mut m = ClassificationMatch::from_config(&config);
//! m.setup().unwrap();
//! m.bind(
//!     "<PATDOC><SDOBI><B500><B510><B511><PDAT>H04N2100".to_string(),
//!     DocumentKind::Application,
//! );
//! assert!(m.is_match().unwrap());
//! ```

pub mod config;
pub mod corpus_match;
pub mod error;

pub use classification::{by_scheme, ClassificationCode, CpcCode, Scheme, UspcCode};
pub use matcher::{
    scan_fields, set_match_metrics, FieldValues, MatchHit, MatchMetrics, MatchResult, Matcher,
    PatternSet, Trigger,
};
pub use pathquery::{
    build_cpc_query, build_query, build_uspc_query, AlternativeExpr, BuildError, ElementPath,
    FieldLocation, PathQuery, PrefixTest, SchemeLayout, CPC_LAYOUT, USPC_LAYOUT,
};

pub use crate::config::{ConfigLoadError, LoggingConfig, PatclassConfig};
pub use crate::corpus_match::{
    ClassificationMatch, CorpusMatch, DocumentKind, Explanation, MatchState,
};
pub use crate::error::CorpusMatchError;
