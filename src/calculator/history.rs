//! Completed calculations.

use serde::{Deserialize, Serialize};

/// One finished calculation: the equation as shown and its result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The equation trace joined by spaces, without the trailing `=`.
    pub equation: String,
    /// The accumulator as displayed.
    pub result: String,
}

impl HistoryEntry {
    /// Create an entry.
    pub fn new(equation: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            equation: equation.into(),
            result: result.into(),
        }
    }
}

/// Append-only log of finished calculations, oldest first.
///
/// With a limit set, recording past the limit drops the oldest entries.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    limit: Option<usize>,
}

impl History {
    /// Create an unbounded, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log keeping at most `limit` entries.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Append a finished calculation.
    pub fn record(&mut self, equation: impl Into<String>, result: impl Into<String>) {
        self.entries.push(HistoryEntry::new(equation, result));
        if let Some(limit) = self.limit
            && self.entries.len() > limit
        {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the entry at `index`, counting from the oldest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut history = History::new();
        history.record("5 + 3", "8");
        history.record("8 × 2", "16");
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0), Some(&HistoryEntry::new("5 + 3", "8")));
        assert_eq!(history.get(1).map(|e| e.result.as_str()), Some("16"));
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record("1 + 1", "2");
        history.clear();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::with_limit(Some(2));
        history.record("1", "1");
        history.record("2", "2");
        history.record("3", "3");
        let equations: Vec<&str> = history.entries().iter().map(|e| e.equation.as_str()).collect();
        assert_eq!(equations, vec!["2", "3"]);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = History::with_limit(Some(0));
        history.record("1", "1");
        assert!(history.is_empty());
    }
}
