use super::AssetSignal;
use serde::{Deserialize, Serialize};

/// Deduplicated asset signals in order of first discovery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSet {
    signals: Vec<AssetSignal>,
}

impl SignalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a signal; returns false if it was already present
    pub fn insert(&mut self, signal: AssetSignal) -> bool {
        if self.signals.contains(&signal) {
            return false;
        }
        self.signals.push(signal);
        true
    }

    pub fn contains(&self, signal: AssetSignal) -> bool {
        self.signals.contains(&signal)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetSignal> {
        self.signals.iter()
    }
}

impl Extend<AssetSignal> for SignalSet {
    fn extend<I: IntoIterator<Item = AssetSignal>>(&mut self, iter: I) {
        for signal in iter {
            self.insert(signal);
        }
    }
}
