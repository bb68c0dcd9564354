// Best-rule selection and application

use std::collections::HashMap;

use morfix_core::Rule;
use morfix_core::symbols::{WORD_END, WORD_START, is_boundary};
use morfix_core::text::replace_first;

use crate::store::RuleStore;

/// Inflect `lemma` with the best stored rules for `msd`.
///
/// If the MSD is unknown to both stores the lemma is returned unchanged;
/// guessing without evidence scores worse than copying. Otherwise the lemma
/// is wrapped in boundary anchors, the best applicable suffix rule is
/// applied, then the best applicable prefix rule on the updated string, and
/// finally every anchor is stripped. Each application rewrites only the
/// first occurrence of the rule pattern.
///
/// Suffix rules rank by pattern length (in code points), then corpus
/// frequency, then replacement length; prefix rules by frequency alone.
/// Both orderings end with the rule's own lexicographic order so a full tie
/// cannot fall through to hash map iteration order.
pub fn apply_best_rules(
    lemma: &str,
    msd: &str,
    prefix_rules: &RuleStore,
    suffix_rules: &RuleStore,
) -> String {
    if !prefix_rules.contains(msd) && !suffix_rules.contains(msd) {
        return lemma.to_string();
    }

    let mut base = format!("{WORD_START}{lemma}{WORD_END}");

    if let Some(candidates) = suffix_rules.rules_for(msd) {
        if let Some(rule) = best_suffix_rule(&base, candidates) {
            base = replace_first(&base, &rule.from, &rule.to);
        }
    }

    if let Some(candidates) = prefix_rules.rules_for(msd) {
        if let Some(rule) = best_prefix_rule(&base, candidates) {
            base = replace_first(&base, &rule.from, &rule.to);
        }
    }

    base.chars().filter(|&c| !is_boundary(c)).collect()
}

fn best_suffix_rule<'a>(base: &str, candidates: &'a HashMap<Rule, u32>) -> Option<&'a Rule> {
    let mut best: Option<(usize, u32, usize, &Rule)> = None;
    for (rule, &count) in candidates {
        if !base.contains(rule.from.as_str()) {
            continue;
        }
        let rank = (rule.pattern_len(), count, rule.output_len(), rule);
        let better = match &best {
            None => true,
            Some(current) => rank > *current,
        };
        if better {
            best = Some(rank);
        }
    }
    best.map(|(_, _, _, rule)| rule)
}

fn best_prefix_rule<'a>(base: &str, candidates: &'a HashMap<Rule, u32>) -> Option<&'a Rule> {
    let mut best: Option<(u32, &Rule)> = None;
    for (rule, &count) in candidates {
        if !base.contains(rule.from.as_str()) {
            continue;
        }
        let rank = (count, rule);
        let better = match &best {
            None => true,
            Some(current) => rank > *current,
        };
        if better {
            best = Some(rank);
        }
    }
    best.map(|(_, rule)| rule)
}
