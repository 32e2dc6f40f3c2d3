//! Keyword-scored query classifier.
//!
//! # Algorithm
//!
//! 1. Lower-case the query.
//! 2. Walk the [`OverrideRule`]s in priority order; the first rule with a
//!    word present as a whole word decides the domain outright.
//! 3. Otherwise score each domain of the [`KeywordTable`]: +1 for every
//!    keyword found as a substring, +1 more when it is also a whole word.
//! 4. The strictly highest score wins. Ties keep the domain that appears
//!    first in the table. A query with no signal at all gets the default
//!    domain.
//!
//! Classification is total: every input, including the empty string, yields
//! a domain.

use super::domain::Domain;
use super::keywords::{KeywordTable, OverrideRule};
use super::matching::{contains_keyword, contains_whole_word};
use serde::Serialize;

/// Domain used when the query carries no signal.
pub const DEFAULT_DOMAIN: Domain = Domain::Devices;

/// Score of a single domain for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: u32,
}

/// Why the classifier picked a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationReason {
    /// An override rule fired on `word`.
    Override { word: String },
    /// Highest keyword score.
    Scored { score: u32 },
    /// No signal; the default domain was used.
    Default,
}

/// Full classification result, useful for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub domain: Domain,
    pub reason: ClassificationReason,
    /// Per-domain scores in table order (empty when an override fired)
    pub scores: Vec<DomainScore>,
}

/// Maps free-text queries to a [`Domain`].
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    table: KeywordTable,
    overrides: Vec<OverrideRule>,
    default_domain: Domain,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DomainClassifier {
    pub fn new(table: KeywordTable, overrides: Vec<OverrideRule>) -> Self {
        Self {
            table,
            overrides,
            default_domain: DEFAULT_DOMAIN,
        }
    }

    /// Classifier over the built-in keyword table and override rules.
    pub fn builtin() -> Self {
        Self::new(KeywordTable::builtin(), OverrideRule::builtin())
    }

    pub fn with_default_domain(mut self, domain: Domain) -> Self {
        self.default_domain = domain;
        self
    }

    pub fn default_domain(&self) -> Domain {
        self.default_domain
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Classify a query into exactly one domain.
    pub fn classify(&self, query: &str) -> Domain {
        self.classify_detailed(query).domain
    }

    /// Classify a query and report how the decision was made.
    pub fn classify_detailed(&self, query: &str) -> Classification {
        let query = query.to_lowercase();

        if let Some((domain, word)) = self.matching_override(&query) {
            return Classification {
                domain,
                reason: ClassificationReason::Override {
                    word: word.to_string(),
                },
                scores: Vec::new(),
            };
        }

        let scores = self.score_lowercased(&query);

        // `>` rather than `>=` keeps the first-seen domain on ties
        let mut best: Option<DomainScore> = None;
        for candidate in &scores {
            if candidate.score > best.map_or(0, |b| b.score) {
                best = Some(*candidate);
            }
        }

        match best {
            Some(winner) => Classification {
                domain: winner.domain,
                reason: ClassificationReason::Scored {
                    score: winner.score,
                },
                scores,
            },
            None => Classification {
                domain: self.default_domain,
                reason: ClassificationReason::Default,
                scores,
            },
        }
    }

    /// Per-domain keyword scores in table order, ignoring override rules.
    pub fn scores(&self, query: &str) -> Vec<DomainScore> {
        self.score_lowercased(&query.to_lowercase())
    }

    fn matching_override<'a>(&'a self, query: &str) -> Option<(Domain, &'a str)> {
        self.overrides.iter().find_map(|rule| {
            rule.words
                .iter()
                .find(|word| contains_whole_word(query, word))
                .map(|word| (rule.domain, word.as_str()))
        })
    }

    fn score_lowercased(&self, query: &str) -> Vec<DomainScore> {
        self.table
            .entries()
            .iter()
            .map(|entry| {
                let score = entry
                    .keywords
                    .iter()
                    .filter(|k| contains_keyword(query, k))
                    .map(|k| if contains_whole_word(query, k) { 2 } else { 1 })
                    .sum();
                DomainScore {
                    domain: entry.domain,
                    score,
                }
            })
            .collect()
    }
}
