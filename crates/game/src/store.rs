// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! High score persistence.
use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use rusqlite::{Connection, OptionalExtension, params};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Stores the high score, the only persisted value.
#[derive(Debug)]
pub struct HighScoreStore {
    conn: Connection,
}

impl HighScoreStore {
    /// Opens a store at the given path, creating the file if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        Self::init(Connection::open(path)?)
    }

    /// Opens a store that is dropped with the connection.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// The default store path in the user data directory.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "handdrill")
            .ok_or_else(|| anyhow!("Cannot find the user home directory"))?;
        Ok(dirs.data_dir().join("handdrill.db"))
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS high_score (
               id INTEGER PRIMARY KEY CHECK (id = 1),
               score INTEGER NOT NULL,
               last_update DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            (),
        )?;

        Ok(Self { conn })
    }

    /// Loads the high score, zero if none has been saved.
    pub fn load(&self) -> Result<u32> {
        let score = self
            .conn
            .query_row("SELECT score FROM high_score WHERE id = 1", (), |row| {
                row.get::<usize, u32>(0)
            })
            .optional()?;

        Ok(score.unwrap_or_default())
    }

    /// Saves a score if it is higher than the stored one, returns the stored
    /// high score.
    pub fn save(&self, score: u32) -> Result<u32> {
        self.conn.execute(
            "INSERT INTO high_score (id, score, last_update)
             VALUES (1, ?1, CURRENT_TIMESTAMP)
             ON CONFLICT(id) DO UPDATE SET
               score = MAX(score, excluded.score),
               last_update = CURRENT_TIMESTAMP",
            params![score],
        )?;

        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store() {
        let store = HighScoreStore::open_in_memory().unwrap();
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_keeps_highest() {
        let store = HighScoreStore::open_in_memory().unwrap();
        assert_eq!(store.save(120).unwrap(), 120);
        assert_eq!(store.save(80).unwrap(), 120);
        assert_eq!(store.load().unwrap(), 120);
        assert_eq!(store.save(300).unwrap(), 300);
        assert_eq!(store.load().unwrap(), 300);
    }

    #[test]
    fn reopen_file() {
        let path = std::env::temp_dir()
            .join(format!("handdrill-test-{}", std::process::id()))
            .join("scores.db");

        {
            let store = HighScoreStore::open(&path).unwrap();
            store.save(42).unwrap();
        }

        let store = HighScoreStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap(), 42);

        drop(store);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
