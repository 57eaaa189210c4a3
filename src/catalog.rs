//! SQLite-backed wallpaper catalog.
//!
//! The catalog only ever grows: the scanner inserts image rows the first
//! time a path is seen, votes are appended, and nothing is updated or
//! deleted. Path uniqueness is the scanner's responsibility (there is no
//! UNIQUE constraint on the column). Every mutation runs in autocommit
//! mode, so a write that returned has already hit disk.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::vote::Vote;

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the catalog at `path`, creating parent directories and the
    /// schema on first use. Reopening an initialized catalog leaves the
    /// schema untouched.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| Error::StorageInit {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory catalog, used by tests.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS images (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 path TEXT NOT NULL,
                 excluded BOOLEAN NOT NULL DEFAULT 0,
                 timestamp DATETIME
             );
             CREATE TABLE IF NOT EXISTS votes (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 image_id INTEGER NOT NULL,
                 recorded_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                 vote TEXT NOT NULL DEFAULT 'ok'
                     CHECK (vote IN ('ok', 'yesh', 'newp', 'fav', 'never')),
                 FOREIGN KEY (image_id) REFERENCES images (id)
             );",
        )?;

        Ok(Self { conn })
    }

    /// Paths of every image currently catalogued.
    pub fn known_paths(&self) -> Result<HashSet<String>> {
        let mut stmt = self.conn.prepare("SELECT path FROM images")?;
        let paths = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<HashSet<_>, _>>()?;
        Ok(paths)
    }

    /// Insert a newly discovered image. The caller is responsible for not
    /// handing in a path that is already catalogued.
    pub fn insert_image(&self, path: &str, timestamp: Option<NaiveDateTime>) -> Result<()> {
        self.conn.execute(
            "INSERT INTO images (path, timestamp) VALUES (?1, ?2)",
            params![path, timestamp],
        )?;
        Ok(())
    }

    /// Append a vote against the image catalogued under `path`.
    ///
    /// The insert-select touches zero rows when the path was never
    /// scanned; that is reported as `ImageNotFound` rather than silently
    /// recording nothing.
    pub fn insert_vote(&self, path: &str, vote: Vote) -> Result<()> {
        let affected = self.conn.execute(
            "INSERT INTO votes (image_id, vote)
                 SELECT id, ?1 FROM images WHERE path = ?2",
            params![vote.as_str(), path],
        )?;

        if affected == 0 {
            return Err(Error::ImageNotFound(path.to_string()));
        }
        Ok(())
    }

    /// One image chosen uniformly at random, `None` on an empty catalog.
    pub fn pick_random(&self) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT path FROM images ORDER BY RANDOM() LIMIT 1")?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Every image carrying an occasion date, for the seasonal selector.
    pub fn dated_images(&self) -> Result<Vec<(String, NaiveDateTime)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT path, timestamp FROM images WHERE timestamp IS NOT NULL")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn image_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM images", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn vote_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM votes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Vote tallies, most common first.
    pub fn vote_counts(&self) -> Result<Vec<(Vote, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT vote, COUNT(*) FROM votes GROUP BY vote ORDER BY COUNT(*) DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(name, count)| Ok((name.parse::<Vote>()?, count)))
            .collect()
    }
}
