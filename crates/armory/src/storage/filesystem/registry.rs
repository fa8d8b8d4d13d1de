//! Append-only squad registry backed by a single text file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use armory_core::squad::{decode_line, encode_record, SquadRecord};
use armory_core::storage::{Result, SquadRepository};

use super::{ensure_dir, run_blocking};

/// Squad registry stored as one percent-encoded record per line.
///
/// Appends go through a file opened in append mode with one `write_all` per
/// complete line, so concurrent writers produce whole lines in some order.
#[derive(Debug, Clone)]
pub struct FsSquadRegistry {
    path: PathBuf,
}

impl FsSquadRegistry {
    /// Opens the registry at `path`, creating its parent directory if needed.
    ///
    /// The file itself is created on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        tracing::debug!(path = %path.display(), "Squad registry ready");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_for_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = match open_for_append(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            open_for_append(path)?
        }
        Err(err) => return Err(err.into()),
    };

    file.write_all(line.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn read_records(path: &Path) -> Result<Vec<SquadRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut records = Vec::new();
    for raw in BufReader::new(file).split(b'\n') {
        let raw = raw?;
        if let Some(record) = decode_line(&String::from_utf8_lossy(&raw)) {
            records.push(record);
        }
    }

    Ok(records)
}

#[async_trait]
impl SquadRepository for FsSquadRegistry {
    async fn append(&self, record: &SquadRecord) -> Result<()> {
        let path = self.path.clone();
        let line = encode_record(record);
        run_blocking(move || append_line(&path, &line)).await?;

        tracing::info!(team = %record.team, "Registered squad");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<SquadRecord>> {
        let path = self.path.clone();
        run_blocking(move || read_records(&path)).await
    }
}
