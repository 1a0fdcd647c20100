//! Classification code value types.
//!
//! Wanted classifications enter patclass as plain values: a CPC code split into
//! its four hierarchy fields, or a USPC main class. Nothing here parses or
//! normalizes code strings; the classification provider hands us fields that
//! were already validated upstream. The query builder re-checks only that the
//! fields it needs are non-empty.
//!
//! ## Example
//!
//! ```
//! use classification::{ClassificationCode, CpcCode, Scheme, UspcCode};
//!
//! let wanted = vec![
//!     ClassificationCode::from(CpcCode::new("H", "04", "N", "21")),
//!     ClassificationCode::from(UspcCode::new("705")),
//! ];
//!
//! assert_eq!(wanted[0].scheme(), Scheme::Cpc);
//! assert_eq!(wanted[0].to_string(), "H04N21");
//! assert_eq!(classification::by_scheme(&wanted, Scheme::Uspc).count(), 1);
//! ```

mod code;

pub use crate::code::{by_scheme, ClassificationCode, CpcCode, Scheme, UspcCode};
