// Per-MSD rule frequency tables

use std::collections::HashMap;

use morfix_core::Rule;

/// Frequency-counted rules grouped by morphosyntactic descriptor.
///
/// One store holds one direction (prefix or suffix). Training appends with
/// [`record`](RuleStore::record); inference only reads. The store is
/// rebuilt from the training data on every run, there is no incremental
/// update path.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    by_msd: HashMap<String, HashMap<Rule, u32>>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every rule in `rules` once under `msd`.
    ///
    /// An empty rule set leaves the store untouched, so the MSD stays
    /// unknown in this direction rather than present with no rules.
    pub fn record<I>(&mut self, msd: &str, rules: I)
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut rules = rules.into_iter().peekable();
        if rules.peek().is_none() {
            return;
        }
        let counts = self.by_msd.entry(msd.to_string()).or_default();
        for rule in rules {
            *counts.entry(rule).or_insert(0) += 1;
        }
    }

    /// Whether any rule has been recorded under `msd`.
    pub fn contains(&self, msd: &str) -> bool {
        self.by_msd.contains_key(msd)
    }

    /// The rule counts recorded under `msd`.
    pub fn rules_for(&self, msd: &str) -> Option<&HashMap<Rule, u32>> {
        self.by_msd.get(msd)
    }

    /// Iterate over every (MSD, rule counts) pair, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashMap<Rule, u32>)> {
        self.by_msd.iter()
    }

    /// Number of distinct MSDs seen in this direction.
    pub fn msd_count(&self) -> usize {
        self.by_msd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_msd.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_and_accumulates() {
        let mut store = RuleStore::new();
        store.record("V;PST", [Rule::new(">", "ed>"), Rule::new("k>", "ked>")]);
        store.record("V;PST", [Rule::new(">", "ed>")]);

        let counts = store.rules_for("V;PST").unwrap();
        assert_eq!(counts[&Rule::new(">", "ed>")], 2);
        assert_eq!(counts[&Rule::new("k>", "ked>")], 1);
    }

    #[test]
    fn msds_are_independent() {
        let mut store = RuleStore::new();
        store.record("V;PST", [Rule::new(">", "ed>")]);
        store.record("V;PRS;3", [Rule::new(">", "s>")]);

        assert_eq!(store.msd_count(), 2);
        assert!(store.rules_for("V;PST").unwrap().get(&Rule::new(">", "s>")).is_none());
    }

    #[test]
    fn empty_rule_set_is_a_noop() {
        let mut store = RuleStore::new();
        store.record("V;PST", std::iter::empty());
        assert!(!store.contains("V;PST"));
        assert!(store.is_empty());
    }

    #[test]
    fn unseen_msd_is_absent() {
        let store = RuleStore::new();
        assert!(!store.contains("N;PL"));
        assert!(store.rules_for("N;PL").is_none());
    }
}
