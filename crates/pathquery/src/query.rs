use std::fmt;

use classification::{ClassificationCode, Scheme};
use serde::Serialize;

/// Absolute element path such as `/PATDOC/SDOBI/B500/B510`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ElementPath(Vec<String>);

impl ElementPath {
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        Self(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// This path extended by `tail`.
    pub fn join<S: AsRef<str>>(&self, tail: &[S]) -> Self {
        let mut segments = self.0.clone();
        segments.extend(tail.iter().map(|s| s.as_ref().to_string()));
        Self(segments)
    }

    /// True when an open-element stack is exactly this path.
    pub fn matches_stack<S: AsRef<str>>(&self, stack: &[S]) -> bool {
        self.0.len() == stack.len()
            && self
                .0
                .iter()
                .zip(stack)
                .all(|(want, open)| want == open.as_ref())
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Which of the duplicated classification locations an alternative tests.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    /// The document's own classification field.
    Primary,
    /// The copy carried in citation data (grants only).
    Secondary,
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldLocation::Primary => f.write_str("primary"),
            FieldLocation::Secondary => f.write_str("secondary"),
        }
    }
}

/// `element[starts-with(text_element, 'prefix')]` below a query's anchor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct PrefixTest {
    pub location: FieldLocation,
    pub element: String,
    pub text_element: String,
    pub prefix: String,
}

impl PrefixTest {
    pub fn accepts(&self, value: &str) -> bool {
        value.starts_with(&self.prefix)
    }
}

/// A compiled classification query.
///
/// Holds the anchor shared by all alternatives and the alternatives in the
/// order they are tried. Built by the functions in this crate only; the
/// prefix is guaranteed non-empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct PathQuery {
    code: ClassificationCode,
    anchor: ElementPath,
    alternatives: Vec<PrefixTest>,
}

impl PathQuery {
    pub(crate) fn new(
        code: ClassificationCode,
        anchor: ElementPath,
        alternatives: Vec<PrefixTest>,
    ) -> Self {
        Self {
            code,
            anchor,
            alternatives,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.code.scheme()
    }

    /// The wanted classification this query was compiled from.
    pub fn code(&self) -> &ClassificationCode {
        &self.code
    }

    pub fn anchor(&self) -> &ElementPath {
        &self.anchor
    }

    pub fn alternatives(&self) -> &[PrefixTest] {
        &self.alternatives
    }

    pub fn prefix(&self) -> &str {
        self.alternatives
            .first()
            .map(|alt| alt.prefix.as_str())
            .unwrap_or_default()
    }

    /// Full path of the element whose text an alternative tests.
    pub fn value_path(&self, alternative: &PrefixTest) -> ElementPath {
        self.anchor
            .join(&[alternative.element.as_str(), alternative.text_element.as_str()])
    }

    /// Textual form of a single alternative, or `None` if out of range.
    pub fn alternative_expr(&self, index: usize) -> Option<AlternativeExpr<'_>> {
        self.alternatives
            .get(index)
            .map(|test| AlternativeExpr::new(&self.anchor, test))
    }
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, test) in self.alternatives.iter().enumerate() {
            if index > 0 {
                f.write_str(" | ")?;
            }
            AlternativeExpr::new(&self.anchor, test).fmt(f)?;
        }
        Ok(())
    }
}

/// Display adapter for one anchored alternative, e.g.
/// `/PATDOC/SDOBI/B500/B520/B522[starts-with(PDAT, '705')]`.
#[derive(Debug, Clone, Copy)]
pub struct AlternativeExpr<'a> {
    anchor: &'a ElementPath,
    test: &'a PrefixTest,
}

impl<'a> AlternativeExpr<'a> {
    pub fn new(anchor: &'a ElementPath, test: &'a PrefixTest) -> Self {
        Self { anchor, test }
    }
}

impl fmt::Display for AlternativeExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}[starts-with({}, '{}')]",
            self.anchor, self.test.element, self.test.text_element, self.test.prefix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_path_display_and_join() {
        let anchor = ElementPath::from_segments(&["PATDOC", "SDOBI"]);
        assert_eq!(anchor.to_string(), "/PATDOC/SDOBI");
        assert_eq!(anchor.join(&["B500"]).to_string(), "/PATDOC/SDOBI/B500");
        assert_eq!(anchor.len(), 2);
    }

    #[test]
    fn matches_stack_requires_exact_depth() {
        let path = ElementPath::from_segments(&["A", "B"]);
        assert!(path.matches_stack(&["A", "B"]));
        assert!(!path.matches_stack(&["A"]));
        assert!(!path.matches_stack(&["A", "B", "C"]));
        assert!(!path.matches_stack(&["A", "b"]));
    }

    #[test]
    fn prefix_test_accepts_longer_codes() {
        let test = PrefixTest {
            location: FieldLocation::Primary,
            element: "B521".into(),
            text_element: "PDAT".into(),
            prefix: "705".into(),
        };
        assert!(test.accepts("705"));
        assert!(test.accepts("705123"));
        assert!(!test.accepts("706000"));
        assert!(!test.accepts(" 705"));
    }
}
