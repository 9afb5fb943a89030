//! Content Scanner
//!
//! Line/regex-level heuristics over raw file text:
//! - style-attribute usage and a few sampled literals
//! - import-origin signals (UI kit, icons, image/browser helpers)
//! - counts of structural UI constructs
//! - best-guess declared component name
//!
//! Nothing is parsed. Constructs split across lines or aliased on import
//! may be over- or under-counted.

mod rules;
mod signals;

pub use rules::{AssetSignal, Construct, ImportSignal, Rule, RuleSet, DEFAULT_MAX_STYLE_SAMPLES};
pub use signals::SignalSet;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Signals and counts found in one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Import signals that matched, in checklist order
    pub imports: BTreeSet<ImportSignal>,
    /// Occurrences per construct; every construct is present
    pub counts: BTreeMap<Construct, usize>,
    /// Any style attribute assignment seen
    pub uses_style_classes: bool,
    /// Sampled style literals, verbatim after trimming
    pub style_samples: Vec<String>,
    /// Inferred declaration name
    pub name: Option<String>,
}

impl Default for ScanResult {
    fn default() -> Self {
        Self {
            imports: BTreeSet::new(),
            counts: Construct::ALL.iter().map(|c| (*c, 0)).collect(),
            uses_style_classes: false,
            style_samples: Vec::new(),
            name: None,
        }
    }
}

impl ScanResult {
    pub fn has(&self, signal: ImportSignal) -> bool {
        self.imports.contains(&signal)
    }

    pub fn count(&self, construct: Construct) -> usize {
        self.counts.get(&construct).copied().unwrap_or(0)
    }

    /// Constructs with a non-zero count, in table order
    pub fn features(&self) -> Vec<(Construct, usize)> {
        Construct::ALL
            .iter()
            .map(|c| (*c, self.count(*c)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

/// Scan one file's text. Never fails; empty text gives an empty result.
pub fn scan(text: &str, rules: &RuleSet) -> ScanResult {
    let uses_style_classes = rules.uses_style_classes(text);

    let mut imports: BTreeSet<ImportSignal> = rules
        .import_rules()
        .iter()
        .filter(|rule| rule.is_match(text))
        .map(|rule| rule.kind)
        .collect();
    if uses_style_classes {
        imports.insert(ImportSignal::StyleEngine);
    }

    let counts = rules
        .construct_rules()
        .iter()
        .map(|rule| (rule.kind, rule.count(text)))
        .collect();

    ScanResult {
        imports,
        counts,
        uses_style_classes,
        style_samples: rules.style_samples(text),
        name: rules.infer_name(text),
    }
}
