use crate::core::ResultPair;
use crate::error::CleanResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// SQLite history of cleaned tweets
#[derive(Debug, Clone)]
pub struct TweetStore {
    db_path: PathBuf,
}

impl TweetStore {
    pub fn new(db_path: PathBuf) -> CleanResult<Self> {
        let store = Self { db_path };
        store.init_db()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn init_db(&self) -> CleanResult<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = self.open()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tweets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tweet TEXT,
                cleaned_tweet TEXT
            )",
            [],
        )?;
        Ok(())
    }

    fn open(&self) -> CleanResult<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Store one pair, returning its row id
    pub fn insert(&self, pair: &ResultPair) -> CleanResult<i64> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO tweets (tweet, cleaned_tweet) VALUES (?, ?)",
            (&pair.raw, &pair.cleaned),
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Store a batch in one transaction
    pub fn insert_all(&self, pairs: &[ResultPair]) -> CleanResult<()> {
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO tweets (tweet, cleaned_tweet) VALUES (?, ?)")?;
            for pair in pairs {
                stmt.execute((&pair.raw, &pair.cleaned))?;
            }
        }
        tx.commit()?;
        debug!("Stored {} tweets", pairs.len());
        Ok(())
    }

    /// Every stored pair, oldest first
    pub fn all(&self) -> CleanResult<Vec<ResultPair>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare("SELECT tweet, cleaned_tweet FROM tweets ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(ResultPair {
                raw: row.get(0)?,
                cleaned: row.get(1)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    pub fn count(&self) -> CleanResult<usize> {
        let conn = self.open()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tweets", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete every stored pair, returning how many were removed
    pub fn clear(&self) -> CleanResult<usize> {
        let conn = self.open()?;
        Ok(conn.execute("DELETE FROM tweets", [])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TweetStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = TweetStore::new(dir.path().join("db/tweets.db")).expect("Failed to open store");
        (dir, store)
    }

    #[test]
    fn test_insert_and_read_back() {
        let (_dir, store) = temp_store();
        let first = store
            .insert(&ResultPair::new("Halo USER", "halo user"))
            .expect("Failed to insert");
        let second = store
            .insert(&ResultPair::new("RT gk", "gk"))
            .expect("Failed to insert");
        assert!(second > first);

        let all = store.all().expect("Failed to read");
        assert_eq!(
            all,
            vec![
                ResultPair::new("Halo USER", "halo user"),
                ResultPair::new("RT gk", "gk"),
            ]
        );
    }

    #[test]
    fn test_insert_all_and_clear() {
        let (_dir, store) = temp_store();
        let pairs: Vec<ResultPair> = (0..5)
            .map(|i| ResultPair::new(format!("raw {}", i), "raw"))
            .collect();
        store.insert_all(&pairs).expect("Failed to insert batch");
        assert_eq!(store.count().expect("Failed to count"), 5);

        assert_eq!(store.clear().expect("Failed to clear"), 5);
        assert!(store.all().expect("Failed to read").is_empty());
    }

    #[test]
    fn test_reopen_keeps_rows() {
        let (dir, store) = temp_store();
        store
            .insert(&ResultPair::new("a", "a"))
            .expect("Failed to insert");
        drop(store);

        let reopened = TweetStore::new(dir.path().join("db/tweets.db")).expect("Failed to reopen");
        assert_eq!(reopened.count().expect("Failed to count"), 1);
    }
}
