use std::cmp::Reverse;
use std::collections::HashMap;

/// Token to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every token in `tokens`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref(), 1);
        }
        table
    }

    pub fn add(&mut self, token: &str, count: u64) {
        if let Some(existing) = self.counts.get_mut(token) {
            *existing += count;
        } else {
            self.counts.insert(token.to_owned(), count);
        }
    }

    /// Sums counts for shared tokens and takes the rest as-is.
    pub fn merge(mut self, other: FrequencyTable) -> FrequencyTable {
        // Fold the smaller table into the larger one.
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (std::mem::take(&mut self.counts), other.counts)
        } else {
            (other.counts, std::mem::take(&mut self.counts))
        };
        for (token, count) in from {
            *into.entry(token).or_insert(0) += count;
        }
        FrequencyTable { counts: into }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The `n` most frequent tokens, highest count first. Equal counts are
    /// ordered by token so the result does not depend on hashing.
    pub fn top_n(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        entries.sort_unstable_by_key(|&(token, count)| (Reverse(count), token));
        entries.truncate(n);
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (token, count) in iter {
            *table.counts.entry(token.into()).or_insert(0) += count;
        }
        table
    }
}

/// Merges per-chunk tables in whatever order they arrive.
pub fn aggregate<I>(tables: I) -> FrequencyTable
where
    I: IntoIterator<Item = FrequencyTable>,
{
    tables
        .into_iter()
        .fold(FrequencyTable::new(), FrequencyTable::merge)
}

#[cfg(test)]
mod tests {
    use super::FrequencyTable;

    #[test]
    fn merge_sums_shared_and_keeps_disjoint() {
        let left: FrequencyTable = [("a", 2), ("b", 1)].into_iter().collect();
        let right: FrequencyTable = [("b", 4), ("c", 3)].into_iter().collect();

        let merged = left.merge(right);
        assert_eq!(merged.get("a"), 2);
        assert_eq!(merged.get("b"), 5);
        assert_eq!(merged.get("c"), 3);
        assert_eq!(merged.total(), 10);
    }

    #[test]
    fn top_n_breaks_ties_by_token() {
        let table: FrequencyTable = [("pear", 2), ("apple", 2), ("fig", 5), ("kiwi", 1)]
            .into_iter()
            .collect();
        assert_eq!(table.top_n(3), vec![("fig", 5), ("apple", 2), ("pear", 2)]);
        assert!(table.top_n(0).is_empty());
        assert_eq!(table.top_n(10).len(), 4);
    }
}
