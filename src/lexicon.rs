//! Lexicon Loading
//!
//! Builds the slang dictionary and profanity set from tabular (CSV) reference
//! data. Both structures are immutable once loaded and shared read-only by
//! every normalization call.
//!
//! Loading is tolerant: rows with the wrong number of fields, or rows the CSV
//! reader cannot parse, are skipped and counted instead of failing the load.

use crate::config::Config;
use crate::error::{CleanError, CleanResult};
use encoding_rs::{Encoding, UTF_8};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Informal token -> canonical word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlangDictionary {
    entries: HashMap<String, String>,
}

impl SlangDictionary {
    /// Build from (informal, canonical) pairs; later keys overwrite earlier ones
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (informal, canonical) in pairs {
            entries.insert(informal.into(), canonical.into());
        }
        Self { entries }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for SlangDictionary {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut entries = HashMap::new();
        for (informal, canonical) in iter {
            entries.insert(informal, canonical);
        }
        Self { entries }
    }
}

/// Terms that get masked with asterisks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfanitySet {
    terms: HashSet<String>,
}

impl ProfanitySet {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<String> for ProfanitySet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// The lexicon pair consumed by the normalizer
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub slang: SlangDictionary,
    pub profanity: ProfanitySet,
}

impl Lexicons {
    pub fn new(slang: SlangDictionary, profanity: ProfanitySet) -> Self {
        Self { slang, profanity }
    }
}

/// Row accounting for one lexicon source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows that contributed an entry
    pub rows: usize,
    /// Rows dropped as malformed
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconReport {
    pub slang: LoadReport,
    pub profanity: LoadReport,
}

/// How lexicon sources are read
#[derive(Debug, Clone)]
pub struct LexiconOptions {
    pub encoding: &'static Encoding,
    pub slang_has_header: bool,
    pub profanity_column: String,
}

impl Default for LexiconOptions {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::WINDOWS_1252,
            slang_has_header: false,
            profanity_column: "ABUSIVE".to_string(),
        }
    }
}

impl LexiconOptions {
    pub fn from_config(config: &Config) -> CleanResult<Self> {
        Ok(Self {
            encoding: resolve_encoding(&config.lexicon_encoding)?,
            slang_has_header: config.slang_has_header,
            profanity_column: config.profanity_column.clone(),
        })
    }
}

/// Map an encoding label ("latin-1", "utf-8", "cp1252", ...) to an encoding.
///
/// Python codec spellings such as `latin-1` and `iso_8859_1` are accepted
/// alongside the WHATWG labels.
pub fn resolve_encoding(label: &str) -> CleanResult<&'static Encoding> {
    let trimmed = label.trim();
    if let Some(encoding) = Encoding::for_label(trimmed.as_bytes()) {
        return Ok(encoding);
    }

    let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
    let canonical = match normalized.as_str() {
        "latin-1" | "latin" => "iso-8859-1",
        other => other,
    };
    Encoding::for_label(canonical.as_bytes())
        .ok_or_else(|| CleanError::Config(format!("Unknown encoding label: {}", label)))
}

/// Decode a whole source with `primary`, falling back to strict UTF-8.
///
/// The fallback only runs when the primary decode reports errors, and the
/// result always comes from a single encoding.
pub fn decode_source(bytes: &[u8], primary: &'static Encoding) -> CleanResult<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let (text, had_errors) = primary.decode_without_bom_handling(bytes);
    if !had_errors {
        return Ok(text.into_owned());
    }

    debug!("{} decode failed, retrying as strict UTF-8", primary.name());
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            CleanError::Decode(format!(
                "source is neither valid {} nor valid UTF-8",
                primary.name()
            ))
        })
}

/// Every CSV record the reader can parse, plus the count of unreadable ones
fn read_records(text: &str) -> (Vec<Vec<String>>, usize) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut skipped = 0;

    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => {
                debug!("Skipping unreadable row {}: {}", line + 1, e);
                skipped += 1;
            }
        }
    }

    (rows, skipped)
}

/// Keep only rows with exactly `width` fields
fn keep_width(rows: Vec<Vec<String>>, width: usize) -> (Vec<Vec<String>>, usize) {
    let mut kept = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for row in rows {
        if row.len() == width {
            kept.push(row);
        } else {
            debug!("Skipping row: expected {} fields, found {}", width, row.len());
            skipped += 1;
        }
    }
    (kept, skipped)
}

/// Read a CSV whose first record is a header. Data rows that do not match the
/// header width are skipped. Returns the rows (header first) and the number
/// skipped.
pub(crate) fn read_rows(text: &str) -> (Vec<Vec<String>>, usize) {
    let (rows, unreadable) = read_records(text);
    let Some(width) = rows.first().map(Vec::len) else {
        return (rows, unreadable);
    };
    let (rows, skipped) = keep_width(rows, width);
    (rows, unreadable + skipped)
}

/// Most common field count among rows with at least two fields.
/// Ties go to the width seen first.
fn dominant_width(rows: &[Vec<String>]) -> Option<usize> {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for row in rows.iter().filter(|row| row.len() >= 2) {
        match counts.iter_mut().find(|(width, _)| *width == row.len()) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.len(), 1)),
        }
    }
    counts
        .iter()
        .fold(None, |best: Option<(usize, usize)>, &(width, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((width, count)),
        })
        .map(|(width, _)| width)
}

/// Build the slang dictionary from column 0 -> column 1
pub fn load_slang<R: Read>(
    mut source: R,
    options: &LexiconOptions,
) -> CleanResult<(SlangDictionary, LoadReport)> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    let text = decode_source(&bytes, options.encoding)?;

    let (mut rows, unreadable) = read_records(&text);
    if options.slang_has_header && !rows.is_empty() {
        rows.remove(0);
    }
    if rows.is_empty() {
        let report = LoadReport {
            rows: 0,
            skipped: unreadable,
        };
        return Ok((SlangDictionary::default(), report));
    }

    // Width comes from the majority of rows, not the first one
    let width = dominant_width(&rows).ok_or_else(|| {
        CleanError::Lexicon("slang source needs at least two columns".to_string())
    })?;
    let (rows, skipped) = keep_width(rows, width);
    let skipped = unreadable + skipped;

    let report = LoadReport {
        rows: rows.len(),
        skipped,
    };
    let dictionary: SlangDictionary = rows
        .into_iter()
        .map(|mut row| {
            row.truncate(2);
            let canonical = row.pop().unwrap_or_default();
            let informal = row.pop().unwrap_or_default();
            (informal, canonical)
        })
        .collect();

    Ok((dictionary, report))
}

/// Build the profanity set from the column named `options.profanity_column`
pub fn load_profanity<R: Read>(
    mut source: R,
    options: &LexiconOptions,
) -> CleanResult<(ProfanitySet, LoadReport)> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    let text = decode_source(&bytes, options.encoding)?;

    let (rows, skipped) = read_rows(&text);
    let mut rows = rows.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| CleanError::Lexicon("profanity source is empty".to_string()))?;
    let column = find_column(&header, &options.profanity_column).ok_or_else(|| {
        CleanError::Lexicon(format!(
            "profanity source has no '{}' column",
            options.profanity_column
        ))
    })?;

    let mut report = LoadReport {
        rows: 0,
        skipped,
    };
    let mut terms = HashSet::new();
    for mut row in rows {
        let term = row.swap_remove(column);
        if term.is_empty() {
            report.skipped += 1;
            continue;
        }
        report.rows += 1;
        terms.insert(term);
    }

    Ok((ProfanitySet { terms }, report))
}

/// Exact header match first, then case-insensitive
pub(crate) fn find_column(header: &[String], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|h| h == name)
        .or_else(|| header.iter().position(|h| h.eq_ignore_ascii_case(name)))
}

/// Load both lexicons from readers
pub fn load_lexicons<S: Read, P: Read>(
    slang_source: S,
    profanity_source: P,
    options: &LexiconOptions,
) -> CleanResult<(Lexicons, LexiconReport)> {
    let (slang, slang_report) = load_slang(slang_source, options)?;
    let (profanity, profanity_report) = load_profanity(profanity_source, options)?;

    Ok((
        Lexicons::new(slang, profanity),
        LexiconReport {
            slang: slang_report,
            profanity: profanity_report,
        },
    ))
}

/// Load both lexicons from files on disk
pub fn load_lexicon_files(
    slang_path: &Path,
    profanity_path: &Path,
    options: &LexiconOptions,
) -> CleanResult<Lexicons> {
    let slang_file = std::fs::File::open(slang_path).map_err(|e| {
        CleanError::Lexicon(format!("cannot open {}: {}", slang_path.display(), e))
    })?;
    let profanity_file = std::fs::File::open(profanity_path).map_err(|e| {
        CleanError::Lexicon(format!("cannot open {}: {}", profanity_path.display(), e))
    })?;

    let (lexicons, report) = load_lexicons(slang_file, profanity_file, options)?;
    info!(
        "📚 Slang dictionary: {} entries ({} rows, {} skipped) from {}",
        lexicons.slang.len(),
        report.slang.rows,
        report.slang.skipped,
        slang_path.display()
    );
    info!(
        "📚 Profanity set: {} terms ({} rows, {} skipped) from {}",
        lexicons.profanity.len(),
        report.profanity.rows,
        report.profanity.skipped,
        profanity_path.display()
    );
    Ok(lexicons)
}
