use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification scheme a code belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Cooperative Patent Classification.
    Cpc,
    /// United States Patent Classification (legacy).
    Uspc,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Cpc => "CPC",
            Scheme::Uspc => "USPC",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPC code down to main-group level, e.g. `H` / `04` / `N` / `21`.
///
/// Fields are stored as supplied. An empty field is representable here on
/// purpose: rejecting it is the query builder's job, where an empty prefix
/// would otherwise turn the filter into a match-everything query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CpcCode {
    /// Section letter (`H`).
    pub section: String,
    /// Two-digit class (`04`).
    pub main_class: String,
    /// Subclass letter (`N`).
    pub sub_class: String,
    /// Main group digits (`21`), variable length.
    pub main_group: String,
}

impl CpcCode {
    pub fn new(
        section: impl Into<String>,
        main_class: impl Into<String>,
        sub_class: impl Into<String>,
        main_group: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            main_class: main_class.into(),
            sub_class: sub_class.into(),
            main_group: main_group.into(),
        }
    }

    /// Field names paired with their values, in hierarchy order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("section", self.section.as_str()),
            ("main_class", self.main_class.as_str()),
            ("sub_class", self.sub_class.as_str()),
            ("main_group", self.main_group.as_str()),
        ]
    }
}

impl fmt::Display for CpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.section, self.main_class, self.sub_class, self.main_group
        )
    }
}

/// USPC code identified by its main class, e.g. `705`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UspcCode {
    pub main_class: String,
}

impl UspcCode {
    pub fn new(main_class: impl Into<String>) -> Self {
        Self {
            main_class: main_class.into(),
        }
    }
}

impl fmt::Display for UspcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.main_class)
    }
}

/// A scheme-tagged wanted classification.
///
/// Serialized with an internal `scheme` tag so lists of codes read naturally
/// in YAML:
///
/// ```yaml
/// - scheme: cpc
///   section: "H"
///   main_class: "04"
///   sub_class: "N"
///   main_group: "21"
/// - scheme: uspc
///   main_class: "705"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum ClassificationCode {
    Cpc(CpcCode),
    Uspc(UspcCode),
}

impl ClassificationCode {
    pub fn scheme(&self) -> Scheme {
        match self {
            ClassificationCode::Cpc(_) => Scheme::Cpc,
            ClassificationCode::Uspc(_) => Scheme::Uspc,
        }
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationCode::Cpc(code) => code.fmt(f),
            ClassificationCode::Uspc(code) => code.fmt(f),
        }
    }
}

impl From<CpcCode> for ClassificationCode {
    fn from(code: CpcCode) -> Self {
        ClassificationCode::Cpc(code)
    }
}

impl From<UspcCode> for ClassificationCode {
    fn from(code: UspcCode) -> Self {
        ClassificationCode::Uspc(code)
    }
}

/// Codes of one scheme from a mixed list, in their original order.
pub fn by_scheme(
    codes: &[ClassificationCode],
    scheme: Scheme,
) -> impl Iterator<Item = &ClassificationCode> + '_ {
    codes.iter().filter(move |code| code.scheme() == scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpc_display_concatenates_fields() {
        let code = CpcCode::new("H", "04", "N", "21");
        assert_eq!(code.to_string(), "H04N21");
        assert_eq!(ClassificationCode::from(code).to_string(), "H04N21");
    }

    #[test]
    fn by_scheme_keeps_input_order() {
        let codes = vec![
            ClassificationCode::from(UspcCode::new("705")),
            ClassificationCode::from(CpcCode::new("H", "04", "N", "21")),
            ClassificationCode::from(UspcCode::new("706")),
            ClassificationCode::from(CpcCode::new("G", "06", "F", "17")),
        ];

        let cpc: Vec<String> = by_scheme(&codes, Scheme::Cpc)
            .map(|c| c.to_string())
            .collect();
        let uspc: Vec<String> = by_scheme(&codes, Scheme::Uspc)
            .map(|c| c.to_string())
            .collect();

        assert_eq!(cpc, vec!["H04N21", "G06F17"]);
        assert_eq!(uspc, vec!["705", "706"]);
    }

    #[test]
    fn tagged_yaml_round_trip() {
        let yaml = r#"
- scheme: cpc
  section: "H"
  main_class: "04"
  sub_class: "N"
  main_group: "21"
- scheme: uspc
  main_class: "705"
"#;
        let codes: Vec<ClassificationCode> = serde_yaml::from_str(yaml).expect("valid yaml");
        assert_eq!(
            codes,
            vec![
                ClassificationCode::Cpc(CpcCode::new("H", "04", "N", "21")),
                ClassificationCode::Uspc(UspcCode::new("705")),
            ]
        );
    }

    #[test]
    fn json_carries_scheme_tag() {
        let code = ClassificationCode::from(UspcCode::new("705"));
        let value = serde_json::to_value(&code).expect("serializes");
        assert_eq!(value, serde_json::json!({"scheme": "uspc", "main_class": "705"}));
    }
}
