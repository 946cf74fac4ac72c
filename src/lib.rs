//! TweetClean Library
//!
//! Text normalization for short social-media posts, plus the lexicon loader,
//! SQLite history and HTTP API around it.

pub mod audit;
pub mod config;
pub mod core;
pub mod error;
pub mod http;
pub mod lexicon;
pub mod store;
pub mod upload;

pub use crate::core::{normalize, normalize_all, ResultPair, TextNormalizer};
pub use error::{CleanError, CleanResult};
pub use lexicon::{load_lexicons, Lexicons, ProfanitySet, SlangDictionary};
