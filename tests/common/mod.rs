use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SLANG_CSV: &str = "yg,yang\ngk,tidak\nbgt,banget\nbdh,bodoh\n";
pub const PROFANITY_CSV: &str = "ABUSIVE\nbodoh\ntolol\n";

/// Lexicon files and a database path inside a throwaway directory
pub struct Fixture {
    pub temp_dir: TempDir,
    pub slang_path: PathBuf,
    pub profanity_path: PathBuf,
    pub db_path: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_lexicons(SLANG_CSV.as_bytes(), PROFANITY_CSV.as_bytes())
    }

    pub fn with_lexicons(slang: &[u8], profanity: &[u8]) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let slang_path = temp_dir.path().join("new_kamusalay.csv");
        let profanity_path = temp_dir.path().join("abusive.csv");
        let db_path = temp_dir.path().join("data/tweets.db");

        fs::write(&slang_path, slang).expect("Failed to write slang csv");
        fs::write(&profanity_path, profanity).expect("Failed to write profanity csv");

        Self {
            temp_dir,
            slang_path,
            profanity_path,
            db_path,
        }
    }
}
