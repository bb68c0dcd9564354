// Memoized edit-distance alignment with reconstruction

use hashbrown::HashMap;
use morfix_core::symbols::GAP;

/// Edit operation costs for [`align`].
///
/// The defaults are unit costs everywhere. Rule extraction aligns with a
/// substitution cost of 1.1 so that substituting is never the free way to
/// absorb a reordering; on exact ties it would otherwise shadow the
/// insert+delete reading that exposes affix material as gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Costs {
    pub insert: f64,
    pub delete: f64,
    pub substitute: f64,
}

impl Default for Costs {
    fn default() -> Self {
        Costs { insert: 1.0, delete: 1.0, substitute: 1.0 }
    }
}

/// Result of [`align`]: two equal-length gapped strings and the total cost.
///
/// Removing the gap markers from `source` reconstructs the source input
/// exactly, likewise for `target`. Matched or substituted characters share
/// a column; inserted characters sit against a source-side gap, deleted
/// characters against a target-side gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub source: Vec<char>,
    pub target: Vec<char>,
    pub cost: f64,
}

/// One memo cell: the best alignment of a suffix pair, independent of how
/// the prefixes were consumed.
#[derive(Clone)]
struct Fragment {
    source: Vec<char>,
    target: Vec<char>,
    cost: f64,
}

/// Align `source` against `target` with minimum total edit cost.
///
/// Memoized over the remaining suffix pair `(i, j)`; the table lives for
/// exactly one call and never leaks state between alignments. On cost ties
/// the substitute-or-match step wins over insert, and insert over delete,
/// so equal-cost inputs always produce the same alignment.
pub fn align(source: &[char], target: &[char], costs: Costs) -> Alignment {
    let mut memo: HashMap<(usize, usize), Fragment> = HashMap::new();
    let best = solve(source, target, 0, 0, &costs, &mut memo);
    Alignment { source: best.source, target: best.target, cost: best.cost }
}

fn solve(
    s: &[char],
    t: &[char],
    i: usize,
    j: usize,
    costs: &Costs,
    memo: &mut HashMap<(usize, usize), Fragment>,
) -> Fragment {
    if let Some(hit) = memo.get(&(i, j)) {
        return hit.clone();
    }

    let best = if i == s.len() {
        // source exhausted: the rest of the target is pure insertion
        Fragment {
            source: vec![GAP; t.len() - j],
            target: t[j..].to_vec(),
            cost: (t.len() - j) as f64 * costs.insert,
        }
    } else if j == t.len() {
        Fragment {
            source: s[i..].to_vec(),
            target: vec![GAP; s.len() - i],
            cost: (s.len() - i) as f64 * costs.delete,
        }
    } else {
        let step = if s[i] == t[j] { 0.0 } else { costs.substitute };

        let diagonal = solve(s, t, i + 1, j + 1, costs, memo);
        let mut best = Fragment {
            source: prefixed(s[i], &diagonal.source),
            target: prefixed(t[j], &diagonal.target),
            cost: step + diagonal.cost,
        };

        let inserted = solve(s, t, i, j + 1, costs, memo);
        let insert_cost = costs.insert + inserted.cost;
        if insert_cost < best.cost {
            best = Fragment {
                source: prefixed(GAP, &inserted.source),
                target: prefixed(t[j], &inserted.target),
                cost: insert_cost,
            };
        }

        let deleted = solve(s, t, i + 1, j, costs, memo);
        let delete_cost = costs.delete + deleted.cost;
        if delete_cost < best.cost {
            best = Fragment {
                source: prefixed(s[i], &deleted.source),
                target: prefixed(GAP, &deleted.target),
                cost: delete_cost,
            };
        }

        best
    };

    memo.insert((i, j), best.clone());
    best
}

fn prefixed(head: char, tail: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(tail.len() + 1);
    out.push(head);
    out.extend_from_slice(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn to_string(cs: &[char]) -> String {
        cs.iter().collect()
    }

    fn aligned(s: &str, t: &str, costs: Costs) -> (String, String, f64) {
        let a = align(&chars(s), &chars(t), costs);
        (to_string(&a.source), to_string(&a.target), a.cost)
    }

    // -- basic alignments --

    #[test]
    fn identical_inputs_cost_nothing() {
        let (s, t, cost) = aligned("walk", "walk", Costs::default());
        assert_eq!(s, "walk");
        assert_eq!(t, "walk");
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn pure_suffix_insertion() {
        let (s, t, cost) = aligned("walk", "walked", Costs::default());
        assert_eq!(s, "walk__");
        assert_eq!(t, "walked");
        assert_eq!(cost, 2.0);
    }

    #[test]
    fn pure_prefix_insertion() {
        let (s, t, cost) = aligned("walk", "unwalk", Costs::default());
        assert_eq!(s, "__walk");
        assert_eq!(t, "unwalk");
        assert_eq!(cost, 2.0);
    }

    #[test]
    fn empty_source_inserts_everything() {
        let (s, t, cost) = aligned("", "abc", Costs::default());
        assert_eq!(s, "___");
        assert_eq!(t, "abc");
        assert_eq!(cost, 3.0);
    }

    #[test]
    fn empty_target_deletes_everything() {
        let (s, t, cost) = aligned("abc", "", Costs::default());
        assert_eq!(s, "abc");
        assert_eq!(t, "___");
        assert_eq!(cost, 3.0);
    }

    #[test]
    fn substitution_shares_a_column_at_default_costs() {
        let (s, t, cost) = aligned("abc", "adc", Costs::default());
        assert_eq!(s, "abc");
        assert_eq!(t, "adc");
        assert_eq!(cost, 1.0);
    }

    // -- cost configuration --

    #[test]
    fn base_cases_use_configured_costs() {
        let costs = Costs { insert: 0.5, delete: 2.0, substitute: 1.0 };
        let (_, _, cost) = aligned("", "abc", costs);
        assert_eq!(cost, 1.5);
        let (_, _, cost) = aligned("abc", "", costs);
        assert_eq!(cost, 6.0);
    }

    #[test]
    fn raised_substitution_cost_still_buys_single_changes() {
        // 1.1 is below insert + delete, so a lone changed character stays
        // in one column
        let costs = Costs { substitute: 1.1, ..Costs::default() };
        let (s, t, cost) = aligned("say", "said", costs);
        assert_eq!(s, "say_");
        assert_eq!(t, "said");
        assert!((cost - 2.1).abs() < 1e-9);
    }

    #[test]
    fn raised_substitution_cost_breaks_reordering_ties() {
        // at unit costs "ab"/"ba" could be two substitutions; at 1.1 the
        // gapped reading is strictly cheaper
        let (s, t, cost) = aligned("ab", "ba", Costs::default());
        assert_eq!((s.as_str(), t.as_str()), ("ab", "ba"));
        assert_eq!(cost, 2.0);

        let costs = Costs { substitute: 1.1, ..Costs::default() };
        let (s, t, cost) = aligned("ab", "ba", costs);
        assert_eq!((s.as_str(), t.as_str()), ("_ab", "ba_"));
        assert_eq!(cost, 2.0);
    }

    // -- invariants --

    #[test]
    fn alignment_reconstructs_both_inputs() {
        for (s, t) in [("walk", "walked"), ("g\u{00FC}l", "g\u{00FC}ller"), ("a", "bcde"), ("", "x")] {
            let a = align(&chars(s), &chars(t), Costs::default());
            assert_eq!(a.source.len(), a.target.len());
            let s_back: String = a.source.iter().filter(|&&c| c != GAP).collect();
            let t_back: String = a.target.iter().filter(|&&c| c != GAP).collect();
            assert_eq!(s_back, s);
            assert_eq!(t_back, t);
        }
    }

    #[test]
    fn cost_is_bounded_below_by_length_difference() {
        let costs = Costs { insert: 0.5, delete: 0.7, substitute: 1.0 };
        for (s, t) in [("walk", "walked"), ("abcdef", "xy"), ("", "abc")] {
            let a = align(&chars(s), &chars(t), costs);
            let diff = (chars(s).len() as f64 - chars(t).len() as f64).abs();
            assert!(a.cost >= diff * 0.5 - 1e-9);
        }
    }

    #[test]
    fn zero_cost_only_for_equal_inputs() {
        assert_eq!(aligned("tie", "tie", Costs::default()).2, 0.0);
        assert!(aligned("tie", "ties", Costs::default()).2 > 0.0);
        assert!(aligned("tie", "die", Costs::default()).2 > 0.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = align(&chars("oynamak"), &chars("oynuyor"), Costs::default());
        let second = align(&chars("oynamak"), &chars("oynuyor"), Costs::default());
        assert_eq!(first, second);
    }
}
