// Corpus-level affixing direction

use std::fmt;

/// Which end of the word a language prefers to inflect.
///
/// Decided once per training corpus by a gap-position vote over heuristic
/// alignments. `Prefixing` means every lemma and form is reversed
/// code-point-wise before rule extraction, and inputs/outputs are reversed
/// again around rule application, so the rule machinery itself only ever
/// sees the suffixing orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
    Suffixing,
    Prefixing,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Suffixing => write!(f, "suffixing"),
            Bias::Prefixing => write!(f, "prefixing"),
        }
    }
}
