//! Classification-to-query compiler.
//!
//! Turns a wanted [`ClassificationCode`](classification::ClassificationCode)
//! into a [`PathQuery`]: an anchor element path plus an ordered list of prefix
//! tests, one per place the classification field can appear in legacy
//! `PATDOC` markup.
//!
//! ## Why more than one location
//!
//! Grant documents repeat classification structure inside their citation
//! data, so a single logical field lives at a primary location and at a
//! secondary/citation location. Each query carries both as alternatives and a
//! document satisfies the query when any alternative holds. The locations are
//! data ([`SchemeLayout`]), not code.
//!
//! ## Prefix semantics
//!
//! A code matches any recorded classification that starts with it, so
//! `H04N21` accepts `H04N2100` and `H04N2199`. An empty field would produce an
//! empty prefix that accepts everything, which is why building fails with
//! [`BuildError`] instead.
//!
//! ## Example
//!
//! ```
//! use classification::CpcCode;
//! use pathquery::{build_cpc_query, FieldLocation};
//!
//! let query = build_cpc_query(&CpcCode::new("H", "04", "N", "21")).unwrap();
//! assert_eq!(query.prefix(), "H04N21");
//! assert_eq!(query.alternatives()[1].location, FieldLocation::Secondary);
//! assert_eq!(
//!     query.to_string(),
//!     "/PATDOC/SDOBI/B500/B510/B511[starts-with(PDAT, 'H04N21')] | \
//!      /PATDOC/SDOBI/B500/B510/B516[starts-with(PDAT, 'H04N21')]"
//! );
//! ```

mod builder;
mod error;
mod layout;
mod query;

pub use crate::builder::{build_cpc_query, build_query, build_uspc_query};
pub use crate::error::BuildError;
pub use crate::layout::{FieldSpec, SchemeLayout, CPC_LAYOUT, USPC_LAYOUT};
pub use crate::query::{AlternativeExpr, ElementPath, FieldLocation, PathQuery, PrefixTest};
