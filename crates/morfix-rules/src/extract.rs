// Suffix and prefix rule ladders

use std::collections::HashSet;

use morfix_core::Rule;
use morfix_core::symbols::{WORD_END, WORD_START};

use crate::segment::segment_pair;

/// Extract prefix and suffix rules from one training pair.
///
/// The pair is aligned and segmented, then each side of the word is
/// unrolled into a ladder of rules. The suffix ladder anchors
/// `root + suffix + ">"` against its form-side counterpart and takes every
/// common tail; the prefix ladder anchors `"<" + prefix` the same way.
/// Gap markers are stripped after slicing, so a slice that was pure gap
/// contributes an empty pattern, and duplicates collapse into the set.
///
/// The shortest suffix rung is always `(">", ...)` and the first prefix
/// rung always starts at `"<"`, so neither set is ever empty.
pub fn extract_rules(lemma: &str, form: &str) -> (HashSet<Rule>, HashSet<Rule>) {
    let parts = segment_pair(lemma, form);

    let ins = concat(&[&parts.lemma_root, &parts.lemma_suffix], Some(WORD_END));
    let outs = concat(&[&parts.form_root, &parts.form_suffix], Some(WORD_END));
    let suffix_rules = ladder(&ins, &outs);

    let inp = anchored(WORD_START, &parts.lemma_prefix);
    let outp = anchored(WORD_START, &parts.form_prefix);
    let prefix_rules = ladder(&inp, &outp);

    (prefix_rules, suffix_rules)
}

/// Every common tail of the two anchored strings, gap-stripped.
fn ladder(ins: &[char], outs: &[char]) -> HashSet<Rule> {
    let mut rules = HashSet::new();
    for i in 0..ins.len().min(outs.len()) {
        rules.insert(Rule::from_aligned(&ins[i..], &outs[i..]));
    }
    rules
}

fn concat(pieces: &[&[char]], tail: Option<char>) -> Vec<char> {
    let mut out = Vec::new();
    for piece in pieces {
        out.extend_from_slice(piece);
    }
    if let Some(c) = tail {
        out.push(c);
    }
    out
}

fn anchored(head: char, rest: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(rest.len() + 1);
    out.push(head);
    out.extend_from_slice(rest);
    out
}
