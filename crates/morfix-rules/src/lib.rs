//! Affix rule induction and application.
//!
//! This crate turns a corpus of (lemma, MSD, inflected form) triples into
//! per-MSD string-edit rules and applies the best-matching rule to unseen
//! lemmas. Training first votes on whether the corpus inflects at the front
//! or the back of the word; prefixing corpora are processed on reversed
//! strings so the rule machinery only ever handles the suffixing
//! orientation. Each training pair is aligned with a slightly raised
//! substitution cost, segmented at its leading and trailing gap runs, and
//! unrolled into ladders of progressively shorter anchored rules whose
//! corpus frequencies drive rule selection.
//!
//! # Architecture
//!
//! - [`corpus`] -- Tab-separated training and evaluation data
//! - [`segment`] -- Alignment segmentation into prefix, root, and suffix
//! - [`extract`] -- Suffix and prefix rule ladders
//! - [`store`] -- Per-MSD rule frequency tables
//! - [`apply`] -- Best-rule selection and application
//! - [`model`] -- Bias vote, training, and prediction facade
//! - [`eval`] -- Exact-match accuracy counters

pub mod apply;
pub mod corpus;
pub mod eval;
pub mod extract;
pub mod model;
pub mod segment;
pub mod store;

/// Error type for corpus parsing.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("line {line}: expected 3 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
}

pub use apply::apply_best_rules;
pub use corpus::{Corpus, Entry};
pub use eval::{Evaluation, evaluate};
pub use extract::extract_rules;
pub use model::{RuleModel, detect_bias};
pub use segment::{SegmentedPair, segment, segment_pair};
pub use store::RuleStore;
