//! Append-only score persistence.
//!
//! Scores live in a flat semicolon-delimited text file, one
//! `name;score` record per line. The file is only ever appended to;
//! malformed lines are skipped when reading.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// One persisted score record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Player display name.
    pub name: String,
    /// Final match score.
    pub score: u32,
}

/// Handle to the durable score list.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    /// Create a handle backed by the given file path.
    ///
    /// The file itself is created lazily on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one score record, creating the file and its parent
    /// directory if needed. Any name and any score are accepted; the
    /// caller substitutes a display name for empty input.
    pub fn record(&self, name: &str, score: u32) -> EngineResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        writeln!(file, "{name};{score}").map_err(|source| self.io_error(source))?;
        Ok(())
    }

    /// The best `n` scores, highest first.
    ///
    /// Ties keep their insertion order. Malformed lines (wrong field
    /// count, non-integer score) are skipped. A missing file reads as
    /// an empty list.
    pub fn top(&self, n: usize) -> EngineResult<Vec<ScoreEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        let mut entries: Vec<ScoreEntry> = text.lines().filter_map(parse_line).collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(n);
        Ok(entries)
    }

    fn io_error(&self, source: std::io::Error) -> EngineError {
        EngineError::ScoreFile {
            path: self.path.clone(),
            source,
        }
    }
}

fn parse_line(line: &str) -> Option<ScoreEntry> {
    let mut fields = line.split(';');
    let name = fields.next()?;
    let score = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    let score = score.trim().parse().ok()?;
    Some(ScoreEntry {
        name: name.to_string(),
        score,
    })
}
