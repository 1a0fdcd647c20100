use classification::{by_scheme, ClassificationCode, Scheme};
use pathquery::{build_query, BuildError, ElementPath, PathQuery};
use tracing::info;

use crate::scan::scan_fields;
use crate::types::{MatchHit, MatchResult, Trigger};

/// Ordered, immutable-after-compile collection of classification queries.
///
/// Query order is the order wanted classifications were supplied, all CPC
/// codes before all USPC codes. Duplicates are kept. The set also tracks the
/// distinct field paths its queries read so a document is scanned once per
/// evaluation regardless of how many queries there are.
///
/// `PatternSet` holds no per-document state; share it behind an `Arc` and
/// evaluate from as many threads as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    queries: Vec<PathQuery>,
    targets: Vec<ElementPath>,
    /// `slots[query][alternative]` is the index into `targets`.
    slots: Vec<Vec<usize>>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every wanted classification, CPC first, then USPC.
    ///
    /// The first code that fails to build aborts compilation; no code is
    /// ever dropped silently.
    pub fn compile(wanted: &[ClassificationCode]) -> Result<Self, BuildError> {
        let mut set = Self::new();
        for scheme in [Scheme::Cpc, Scheme::Uspc] {
            for code in by_scheme(wanted, scheme) {
                set.push(build_query(code)?);
            }
        }
        info!(
            wanted = wanted.len(),
            queries = set.len(),
            field_paths = set.targets.len(),
            "pattern_set_compiled"
        );
        Ok(set)
    }

    /// Append an already-built query.
    pub fn push(&mut self, query: PathQuery) {
        let slots: Vec<usize> = query
            .alternatives()
            .iter()
            .map(|alternative| {
                let path = query.value_path(alternative);
                match self.targets.iter().position(|known| *known == path) {
                    Some(index) => index,
                    None => {
                        self.targets.push(path);
                        self.targets.len() - 1
                    }
                }
            })
            .collect();
        self.slots.push(slots);
        self.queries.push(query);
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn queries(&self) -> &[PathQuery] {
        &self.queries
    }

    pub fn get(&self, index: usize) -> Option<&PathQuery> {
        self.queries.get(index)
    }

    /// Distinct field paths read by this set.
    pub fn field_paths(&self) -> &[ElementPath] {
        &self.targets
    }

    /// Evaluate all queries against `document` in order and report the
    /// first alternative whose field value carries the wanted prefix.
    ///
    /// A missing anchor or field is simply "no match" for that query.
    pub fn evaluate(&self, document: &str) -> MatchResult {
        if self.is_empty() {
            return MatchResult::no_match();
        }

        let fields = scan_fields(document, &self.targets);
        for (query_index, query) in self.queries.iter().enumerate() {
            for (alternative_index, alternative) in query.alternatives().iter().enumerate() {
                let target = self.slots[query_index][alternative_index];
                if let Some(value) = fields
                    .get(target)
                    .iter()
                    .find(|value| alternative.accepts(value))
                {
                    return MatchResult {
                        hit: Some(MatchHit {
                            query_index,
                            alternative_index,
                            location: alternative.location,
                            value: value.clone(),
                        }),
                    };
                }
            }
        }
        MatchResult::no_match()
    }

    /// Resolve a hit produced by this set. Returns `None` for hits whose
    /// indexes do not exist here.
    pub fn trigger<'a>(&'a self, hit: &'a MatchHit) -> Option<Trigger<'a>> {
        let query = self.get(hit.query_index)?;
        query.alternatives().get(hit.alternative_index)?;
        Some(Trigger::new(query, hit))
    }
}
