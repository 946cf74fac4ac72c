//! Text Normalization
//!
//! Cleans raw tweets before they are stored: strips byte-escape noise and
//! mis-decoded emoji glyphs, keeps only ASCII alphanumerics, drops digits,
//! lower-cases, substitutes slang, masks profanity and removes marker tokens.
//!
//! Every call is a pure function of the input and the two lexicons.

use crate::lexicon::{Lexicons, ProfanitySet, SlangDictionary};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

lazy_static! {
    /// Literal `\xHH` escapes and stray glyphs left by mis-decoded emoji
    static ref NOISE: Regex =
        Regex::new(r"\\x[0-9a-fA-F]{2}|[ð¤â¦ï¿½]").expect("noise pattern is valid");
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-zA-Z0-9]").expect("class pattern is valid");
    static ref DIGITS: Regex = Regex::new(r"[0-9]+").expect("digit pattern is valid");
}

/// Tokens removed after masking.
///
/// "uniform resource locator" and "user:" can never equal a single token once
/// the character filter has run. They are kept so output stays identical to
/// what existing consumers of the stored data expect.
pub const EXCLUDED_TOKENS: [&str; 5] = [
    "pengguna",
    "uniform resource locator",
    "rt",
    "user:",
    "amp",
];

/// A raw tweet and its cleaned form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPair {
    #[serde(rename = "Tweet")]
    pub raw: String,
    #[serde(rename = "Cleaned Tweet")]
    pub cleaned: String,
}

impl ResultPair {
    pub fn new(raw: impl Into<String>, cleaned: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            cleaned: cleaned.into(),
        }
    }
}

/// Normalize one raw string
pub fn normalize(raw: &str, slang: &SlangDictionary, profanity: &ProfanitySet) -> String {
    let text = NOISE.replace_all(raw, "");
    let text = NON_ALNUM.replace_all(&text, " ");
    let text = DIGITS.replace_all(&text, "");
    let text = text.to_lowercase();

    text.split_whitespace()
        .map(|word| slang.get(word).unwrap_or(word))
        .map(|word| {
            if profanity.contains(word) {
                "*".repeat(word.chars().count())
            } else {
                word.to_string()
            }
        })
        .filter(|word| !EXCLUDED_TOKENS.contains(&word.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize every raw string independently, preserving order
pub fn normalize_all<I, S>(
    raws: I,
    slang: &SlangDictionary,
    profanity: &ProfanitySet,
) -> Vec<ResultPair>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    raws.into_iter()
        .map(|raw| {
            let raw = raw.into();
            let cleaned = normalize(&raw, slang, profanity);
            ResultPair { raw, cleaned }
        })
        .collect()
}

/// Normalizer bound to a shared lexicon pair
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    lexicons: Arc<Lexicons>,
}

impl TextNormalizer {
    /// Create a new text normalizer
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize(text, &self.lexicons.slang, &self.lexicons.profanity)
    }

    pub fn normalize_all<I, S>(&self, texts: I) -> Vec<ResultPair>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        normalize_all(texts, &self.lexicons.slang, &self.lexicons.profanity)
    }
}
