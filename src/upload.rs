//! Bulk upload parsing
//!
//! An upload is a CSV file with a `Tweet` column. Other columns are ignored.

use crate::error::{CleanError, CleanResult};
use crate::lexicon::{decode_source, find_column, read_rows};
use encoding_rs::Encoding;
use tracing::debug;

/// Column holding the raw tweets
pub const TWEET_COLUMN: &str = "Tweet";

/// Extract the raw tweets from an uploaded CSV, in file order
pub fn parse_upload(bytes: &[u8], encoding: &'static Encoding) -> CleanResult<Vec<String>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(CleanError::Upload("uploaded file is empty".to_string()));
    }

    let text = decode_source(bytes, encoding)?;
    let (rows, skipped) = read_rows(&text);
    let mut rows = rows.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| CleanError::Upload("uploaded file has no header row".to_string()))?;
    let column = find_column(&header, TWEET_COLUMN).ok_or_else(|| {
        CleanError::Upload(format!("uploaded file has no '{}' column", TWEET_COLUMN))
    })?;

    let tweets: Vec<String> = rows.map(|mut row| row.swap_remove(column)).collect();
    debug!("Parsed {} tweets from upload ({} rows skipped)", tweets.len(), skipped);
    Ok(tweets)
}
