//! String alignment engine for the morfix inflection toolkit.
//!
//! Two aligners over code-point slices, both producing equal-length gapped
//! strings. The heuristic aligner slides one word past the other and keeps
//! the best Hamming score; it is cheap and exists to vote on whether a
//! corpus inflects at the front or the back of the word. The edit-distance
//! aligner is a memoized recursion with configurable costs and full
//! alignment reconstruction; rule extraction is built on it.
//!
//! # Architecture
//!
//! - [`hamming`] -- Positionwise mismatch count
//! - [`heuristic`] -- Pad-and-slide alignment scored by Hamming distance
//! - [`edit`] -- Memoized edit-distance alignment with reconstruction

pub mod edit;
pub mod hamming;
pub mod heuristic;

pub use edit::{Alignment, Costs, align};
pub use hamming::hamming;
pub use heuristic::heuristic_align;
