//! Core processing modules
//!
//! Contains the text normalization pipeline.

pub mod text_normalizer;

pub use text_normalizer::{normalize, normalize_all, ResultPair, TextNormalizer};
