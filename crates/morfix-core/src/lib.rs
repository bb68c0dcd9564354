//! Shared vocabulary for the morfix inflection toolkit.
//!
//! Everything in this crate is dependency-free: reserved marker symbols,
//! code-point-level text helpers, and the two plain data types (`Rule`,
//! `Bias`) that the aligner and the rule system exchange.
//!
//! # Architecture
//!
//! - [`symbols`] -- Reserved marker characters (gap, word boundaries)
//! - [`text`] -- Code-point string helpers (runs, reversal, first-occurrence replace)
//! - [`rule`] -- Edit rule pairs with gap stripping
//! - [`bias`] -- Corpus-level affixing direction

pub mod bias;
pub mod rule;
pub mod symbols;
pub mod text;

pub use bias::Bias;
pub use rule::Rule;
