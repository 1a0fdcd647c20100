//! Where each scheme's classification fields live in `PATDOC` markup.
//!
//! ```text
//! PATDOC
//! └── SDOBI
//!     └── B500
//!         ├── B510            CPC anchor
//!         │   ├── B511/PDAT   primary
//!         │   └── B516/PDAT   secondary / citation
//!         └── B520            USPC anchor
//!             ├── B521/PDAT   primary
//!             └── B522/PDAT   secondary / citation
//! ```
//!
//! Adding a location is a matter of appending a [`FieldSpec`].

use classification::Scheme;

use crate::query::FieldLocation;

/// One field location below a scheme's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub location: FieldLocation,
    /// Element directly below the anchor (`B511`).
    pub element: &'static str,
    /// Child element holding the code text (`PDAT`).
    pub text_element: &'static str,
}

/// Anchor and field locations for one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeLayout {
    pub scheme: Scheme,
    pub anchor: &'static [&'static str],
    pub fields: &'static [FieldSpec],
}

pub const CPC_LAYOUT: SchemeLayout = SchemeLayout {
    scheme: Scheme::Cpc,
    anchor: &["PATDOC", "SDOBI", "B500", "B510"],
    fields: &[
        FieldSpec {
            location: FieldLocation::Primary,
            element: "B511",
            text_element: "PDAT",
        },
        FieldSpec {
            location: FieldLocation::Secondary,
            element: "B516",
            text_element: "PDAT",
        },
    ],
};

pub const USPC_LAYOUT: SchemeLayout = SchemeLayout {
    scheme: Scheme::Uspc,
    anchor: &["PATDOC", "SDOBI", "B500", "B520"],
    fields: &[
        FieldSpec {
            location: FieldLocation::Primary,
            element: "B521",
            text_element: "PDAT",
        },
        FieldSpec {
            location: FieldLocation::Secondary,
            element: "B522",
            text_element: "PDAT",
        },
    ],
};

impl SchemeLayout {
    pub fn for_scheme(scheme: Scheme) -> &'static SchemeLayout {
        match scheme {
            Scheme::Cpc => &CPC_LAYOUT,
            Scheme::Uspc => &USPC_LAYOUT,
        }
    }
}
