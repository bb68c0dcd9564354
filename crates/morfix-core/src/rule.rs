// Edit rule pairs

use crate::symbols::GAP;
use crate::text::strip_all;

/// A single string-edit rule: replace `from` with `to`.
///
/// Patterns carry the boundary anchors where the extraction ladder kept
/// them (`>` at the end of suffix patterns, `<` at the head of full prefix
/// patterns) and never contain gap markers. Either side may be empty when
/// an aligned slice consisted of gaps only.
///
/// The derived `Ord` compares `from` then `to`; rule selection uses it as
/// the final tie-break so that the winning rule never depends on hash map
/// iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule {
    pub from: String,
    pub to: String,
}

impl Rule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Rule { from: from.into(), to: to.into() }
    }

    /// Build a rule from two aligned slices, stripping every gap marker.
    pub fn from_aligned(from: &[char], to: &[char]) -> Self {
        Rule {
            from: strip_all(from, GAP),
            to: strip_all(to, GAP),
        }
    }

    /// Code-point length of the match pattern.
    pub fn pattern_len(&self) -> usize {
        self.from.chars().count()
    }

    /// Code-point length of the replacement.
    pub fn output_len(&self) -> usize {
        self.to.chars().count()
    }
}
