//! Call-path frequency table with first-seen ordering.

use rustc_hash::FxHashMap;

/// Counts calls per path. Paths keep the order they were first seen in.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    index: FxHashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &str) {
        match self.index.get(path) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(path.to_string(), self.counts.len());
                self.counts.push((path.to_string(), 1));
            }
        }
    }

    /// Distinct paths seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent paths, count descending, ties by first-seen.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.counts.clone();
        // Stable: equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
