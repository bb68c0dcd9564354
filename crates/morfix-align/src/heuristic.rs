// Pad-and-slide alignment scored by Hamming distance

use morfix_core::symbols::GAP;

use crate::hamming::hamming;

/// Align two words by sliding one past the other.
///
/// Every candidate pads both words to length `source.len() + target.len()`
/// with gap markers: first the source is slid across a right-anchored
/// target, then the target across a right-anchored source. Candidates are
/// scored by Hamming distance and the first strictly-best one wins. Columns
/// where both sides are gaps are dropped from the result.
///
/// The output pair has equal length and reconstructs each input when that
/// side's gaps are removed. This is not a minimum-edit alignment; it is the
/// cheap signal the corpus bias vote is built on.
pub fn heuristic_align(source: &[char], target: &[char]) -> (Vec<char>, Vec<char>) {
    let slen = source.len();
    let tlen = target.len();

    let mut best_source: Vec<char> = Vec::new();
    let mut best_target: Vec<char> = Vec::new();
    // one more than the worst possible score, so the first candidate always lands
    let mut best_score = slen + tlen + 1;

    for upad in 0..=tlen {
        let upper = padded(upad, source, tlen - upad);
        let lower = padded(slen, target, 0);
        let score = hamming(&upper, &lower);
        if score < best_score {
            best_source = upper;
            best_target = lower;
            best_score = score;
        }
    }

    for lpad in 0..=slen {
        let upper = padded(tlen, source, 0);
        let lower = padded(slen - lpad, target, lpad);
        let score = hamming(&upper, &lower);
        if score < best_score {
            best_source = upper;
            best_target = lower;
            best_score = score;
        }
    }

    let mut out_source = Vec::with_capacity(best_source.len());
    let mut out_target = Vec::with_capacity(best_target.len());
    for (&a, &b) in best_source.iter().zip(best_target.iter()) {
        if a != GAP || b != GAP {
            out_source.push(a);
            out_target.push(b);
        }
    }
    (out_source, out_target)
}

fn padded(front: usize, middle: &[char], back: usize) -> Vec<char> {
    let mut out = vec![GAP; front];
    out.extend_from_slice(middle);
    out.resize(out.len() + back, GAP);
    out
}
