use classification::{ClassificationCode, CpcCode, Scheme, UspcCode};
use tracing::info;

use crate::error::BuildError;
use crate::layout::SchemeLayout;
use crate::query::{ElementPath, PathQuery, PrefixTest};

/// Compile a CPC code into a query over `B511` (primary) and `B516`
/// (secondary) below `/PATDOC/SDOBI/B500/B510`.
///
/// The prefix is section + class + subclass + main group, concatenated
/// verbatim.
pub fn build_cpc_query(code: &CpcCode) -> Result<PathQuery, BuildError> {
    for (field, value) in code.fields() {
        check_field(Scheme::Cpc, field, value, &code.to_string())?;
    }
    Ok(compile(
        SchemeLayout::for_scheme(Scheme::Cpc),
        ClassificationCode::Cpc(code.clone()),
        code.to_string(),
    ))
}

/// Compile a USPC code into a query over `B521` (primary) and `B522`
/// (secondary) below `/PATDOC/SDOBI/B500/B520`.
pub fn build_uspc_query(code: &UspcCode) -> Result<PathQuery, BuildError> {
    check_field(Scheme::Uspc, "main_class", &code.main_class, &code.main_class)?;
    Ok(compile(
        SchemeLayout::for_scheme(Scheme::Uspc),
        ClassificationCode::Uspc(code.clone()),
        code.main_class.clone(),
    ))
}

/// Compile any scheme-tagged code.
pub fn build_query(code: &ClassificationCode) -> Result<PathQuery, BuildError> {
    match code {
        ClassificationCode::Cpc(cpc) => build_cpc_query(cpc),
        ClassificationCode::Uspc(uspc) => build_uspc_query(uspc),
    }
}

fn check_field(
    scheme: Scheme,
    field: &'static str,
    value: &str,
    code: &str,
) -> Result<(), BuildError> {
    if value.trim().is_empty() {
        return Err(BuildError::EmptyField {
            scheme,
            field,
            code: code.to_string(),
        });
    }
    if value.contains('\'') {
        return Err(BuildError::QuoteInField {
            scheme,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn compile(layout: &SchemeLayout, code: ClassificationCode, prefix: String) -> PathQuery {
    let alternatives = layout
        .fields
        .iter()
        .map(|spec| PrefixTest {
            location: spec.location,
            element: spec.element.to_string(),
            text_element: spec.text_element.to_string(),
            prefix: prefix.clone(),
        })
        .collect();

    let query = PathQuery::new(
        code,
        ElementPath::from_segments(layout.anchor),
        alternatives,
    );
    info!(scheme = %layout.scheme, query = %query, "query_built");
    query
}
