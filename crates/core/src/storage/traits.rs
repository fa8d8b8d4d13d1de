use async_trait::async_trait;

use crate::media::MediaFile;
use crate::squad::SquadRecord;

use super::Result;

/// Store for a flat directory of image files.
///
/// Every name argument is untrusted and is sanitized by the implementation
/// before it touches the filesystem.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Lists stored image names, sorted case-insensitively.
    ///
    /// Hidden files and files outside the extension allow-list are skipped.
    /// An empty or missing directory yields an empty list.
    async fn list(&self) -> Result<Vec<String>>;

    /// Stores `content` under the sanitized form of `raw_name`, replacing any
    /// file of the same name. Returns the name actually used.
    async fn save(&self, raw_name: &str, content: Vec<u8>) -> Result<String>;

    /// Reads a listable image back.
    async fn read(&self, raw_name: &str) -> Result<(MediaFile, Vec<u8>)>;

    /// Removes a stored file. Returns the sanitized name that was removed.
    async fn delete(&self, raw_name: Option<&str>) -> Result<String>;
}

/// Append-only registry of squad records.
#[async_trait]
pub trait SquadRepository: Send + Sync {
    /// Appends one record as a single complete line.
    async fn append(&self, record: &SquadRecord) -> Result<()>;

    /// Reads every record, oldest first.
    async fn read_all(&self) -> Result<Vec<SquadRecord>>;
}
