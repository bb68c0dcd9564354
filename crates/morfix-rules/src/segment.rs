// Alignment segmentation into prefix, root, and suffix

use morfix_align::{Alignment, Costs, align};
use morfix_core::symbols::GAP;
use morfix_core::text::{leading_run, trailing_run};

/// Costs for extraction alignments. Substitution sits just above unit cost,
/// so an equal-cost choice between one substituted column and an
/// insert+delete pair resolves to the gapped reading.
pub(crate) const EXTRACTION_COSTS: Costs = Costs { insert: 1.0, delete: 1.0, substitute: 1.1 };

/// An alignment cut into three aligned zones per side.
///
/// The prefix zone is the maximal leading gap run over both sides, the
/// suffix zone the maximal trailing gap run; the root is whatever remains
/// between them, internal gaps included. Both sides are cut at the same
/// offsets, so zone pairs stay aligned column-for-column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedPair {
    pub lemma_prefix: Vec<char>,
    pub lemma_root: Vec<char>,
    pub lemma_suffix: Vec<char>,
    pub form_prefix: Vec<char>,
    pub form_root: Vec<char>,
    pub form_suffix: Vec<char>,
}

/// Cut an alignment at its leading and trailing gap runs.
///
/// With an empty input string one side of the alignment is all gaps and the
/// two runs overlap; the root comes out empty and the prefix and suffix
/// zones then both cover the whole alignment. Extraction tolerates the
/// duplicated material, so the overlap is kept rather than split.
pub fn segment(alignment: &Alignment) -> SegmentedPair {
    let lspace = leading_run(&alignment.source, GAP).max(leading_run(&alignment.target, GAP));
    let tspace = trailing_run(&alignment.source, GAP).max(trailing_run(&alignment.target, GAP));
    let len = alignment.source.len();
    let root_end = len.saturating_sub(tspace);

    SegmentedPair {
        lemma_prefix: span(&alignment.source, 0, lspace),
        lemma_root: span(&alignment.source, lspace, root_end),
        lemma_suffix: span(&alignment.source, root_end, len),
        form_prefix: span(&alignment.target, 0, lspace),
        form_root: span(&alignment.target, lspace, root_end),
        form_suffix: span(&alignment.target, root_end, len),
    }
}

/// Align a lemma/form pair with [`EXTRACTION_COSTS`] and segment the result.
pub fn segment_pair(lemma: &str, form: &str) -> SegmentedPair {
    let source: Vec<char> = lemma.chars().collect();
    let target: Vec<char> = form.chars().collect();
    segment(&align(&source, &target, EXTRACTION_COSTS))
}

fn span(s: &[char], from: usize, to: usize) -> Vec<char> {
    if from < to { s[from..to].to_vec() } else { Vec::new() }
}
