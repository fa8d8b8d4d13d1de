//! Filesystem storage backend.
//!
//! Each operation runs as one blocking closure on tokio's blocking pool.
//! File handles are opened and dropped inside that closure, so none is ever
//! held across an `.await`.

mod media;
mod registry;

pub use media::FsMediaStore;
pub use registry::FsSquadRegistry;

use std::io;
use std::path::Path;

use armory_core::storage::{Result, StoreError};

/// Runs a blocking store operation to completion on the blocking pool.
async fn run_blocking<T, F>(op: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| StoreError::SystemFailure(format!("Store task did not complete: {e}")))?
}

/// Creates `dir` and its parents if missing. Idempotent.
fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Maps a missing-file error to `NotFound(name)`, anything else to `SystemFailure`.
fn missing_as_not_found(err: io::Error, name: &str) -> StoreError {
    if err.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(name.to_string())
    } else {
        StoreError::from(err)
    }
}

/// Maps an error from a staged upload to `SystemFailure` by kind only.
///
/// tempfile annotates its errors with the temporary file's absolute path,
/// which must not reach clients.
fn staging_failure(err: io::Error) -> StoreError {
    StoreError::SystemFailure(format!("Could not stage upload: {}", err.kind()))
}
