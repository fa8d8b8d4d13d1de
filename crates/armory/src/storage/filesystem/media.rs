//! Directory-backed media store.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use armory_core::media::{sort_media_names, MediaFile};
use armory_core::naming::sanitize_file_name;
use armory_core::storage::{MediaRepository, Result, StoreError};

use super::{ensure_dir, missing_as_not_found, run_blocking, staging_failure};

/// Prefix for in-flight uploads. The leading dot keeps them out of listings.
const TEMP_PREFIX: &str = ".upload-";

/// Media store over a single flat directory of image files.
///
/// Uploads are written to a hidden temporary file in the same directory and
/// renamed over the target, so readers never observe a partial image. A
/// second upload under an existing name replaces it (last write wins).
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    /// Opens the store at `root`, creating the directory if it is missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;

        tracing::debug!(root = %root.display(), "Media store ready");

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn list_names(root: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            ensure_dir(root)?;
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;

        // Symlinks and directories are not stored media.
        if !entry.file_type()?.is_file() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        if MediaFile::from_name(&name).is_some() {
            names.push(name);
        }
    }

    sort_media_names(&mut names);
    Ok(names)
}

fn write_atomically(root: &Path, name: &str, content: &[u8]) -> Result<()> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    // Dropping `staged` on any early return removes the temporary file.
    let mut staged = builder.tempfile_in(root).map_err(staging_failure)?;
    staged.write_all(content).map_err(staging_failure)?;
    staged.as_file().sync_all().map_err(staging_failure)?;

    staged
        .persist(root.join(name))
        .map_err(|err| staging_failure(err.error))?;

    Ok(())
}

fn read_file(root: &Path, name: &str) -> Result<(MediaFile, Vec<u8>)> {
    let file = MediaFile::from_name(name).ok_or_else(|| StoreError::NotFound(name.to_string()))?;
    let path = root.join(name);

    let metadata = fs::symlink_metadata(&path).map_err(|err| missing_as_not_found(err, name))?;
    if !metadata.is_file() {
        return Err(StoreError::NotFound(name.to_string()));
    }

    let bytes = fs::read(&path).map_err(|err| missing_as_not_found(err, name))?;
    Ok((file, bytes))
}

fn remove_file(root: &Path, name: &str) -> Result<()> {
    let path = root.join(name);

    fs::symlink_metadata(&path).map_err(|err| missing_as_not_found(err, name))?;
    fs::remove_file(&path).map_err(|err| missing_as_not_found(err, name))?;

    Ok(())
}

#[async_trait]
impl MediaRepository for FsMediaStore {
    async fn list(&self) -> Result<Vec<String>> {
        let root = self.root.clone();
        run_blocking(move || list_names(&root)).await
    }

    async fn save(&self, raw_name: &str, content: Vec<u8>) -> Result<String> {
        let name = sanitize_file_name(raw_name)
            .ok_or_else(|| StoreError::InvalidName(raw_name.to_string()))?;

        let root = self.root.clone();
        let target = name.clone();
        let size = content.len();
        run_blocking(move || write_atomically(&root, &target, &content)).await?;

        tracing::info!(name = %name, bytes = size, "Stored media file");
        Ok(name)
    }

    async fn read(&self, raw_name: &str) -> Result<(MediaFile, Vec<u8>)> {
        let name = sanitize_file_name(raw_name).ok_or(StoreError::NoTarget)?;

        let root = self.root.clone();
        run_blocking(move || read_file(&root, &name)).await
    }

    async fn delete(&self, raw_name: Option<&str>) -> Result<String> {
        let name = raw_name
            .and_then(sanitize_file_name)
            .ok_or(StoreError::NoTarget)?;

        let root = self.root.clone();
        let target = name.clone();
        run_blocking(move || remove_file(&root, &target)).await?;

        tracing::info!(name = %name, "Deleted media file");
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsMediaStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_upload_list_delete_cycle() {
        let (_dir, store) = store();

        let name = store.save("cat.png", b"PNGDATA".to_vec()).await.unwrap();
        assert_eq!(name, "cat.png");
        assert_eq!(store.list().await.unwrap(), vec!["cat.png"]);

        let deleted = store.delete(Some("cat.png")).await.unwrap();
        assert_eq!(deleted, "cat.png");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("www").join("images");

        let store = FsMediaStore::new(&root).unwrap();

        assert!(root.is_dir());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_recreates_vanished_root() {
        let (dir, store) = store();
        fs::remove_dir(dir.path()).unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let (dir, store) = store();
        for name in ["beta.PNG", "Alpha.jpg", "notes.txt", ".hidden.gif", "gamma.svg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("folder.png")).unwrap();

        let names = store.list().await.unwrap();

        assert_eq!(names, vec!["Alpha.jpg", "beta.PNG", "gamma.svg"]);
    }

    #[tokio::test]
    async fn test_list_ignores_text_file() {
        let (dir, store) = store();
        fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_same_name_overwrites() {
        let (dir, store) = store();

        store.save("ray.gif", b"first".to_vec()).await.unwrap();
        store.save("ray.gif", b"second".to_vec()).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec!["ray.gif"]);
        assert_eq!(fs::read(dir.path().join("ray.gif")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_save_strips_traversal() {
        let (dir, store) = store();

        let name = store
            .save("../../escape.png", b"data".to_vec())
            .await
            .unwrap();

        assert_eq!(name, "escape.png");
        assert!(dir.path().join("escape.png").is_file());
        assert!(!dir.path().parent().unwrap().join("escape.png").exists());
    }

    #[tokio::test]
    async fn test_save_rejects_empty_name() {
        let (_dir, store) = store();

        for raw in ["", "/", "../", ".."] {
            let result = store.save(raw, b"data".to_vec()).await;
            assert_eq!(result, Err(StoreError::InvalidName(raw.to_string())));
        }
    }

    #[tokio::test]
    async fn test_save_leaves_no_temporary_files() {
        let (dir, store) = store();

        store.save("a.png", vec![7; 4096]).await.unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(TEMP_PREFIX))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_save_into_vanished_root_fails_cleanly() {
        let (dir, store) = store();
        fs::remove_dir(dir.path()).unwrap();

        let err = store.save("cat.png", b"data".to_vec()).await.unwrap_err();

        assert!(matches!(err, StoreError::SystemFailure(_)));
        let message = err.to_string();
        assert!(!message.contains(&*dir.path().to_string_lossy()));
        assert!(!message.contains(TEMP_PREFIX));
    }

    #[tokio::test]
    async fn test_delete_strips_leading_dots() {
        let (dir, store) = store();
        fs::write(dir.path().join("x.png"), b"x").unwrap();

        let deleted = store.delete(Some(".x.png")).await.unwrap();

        assert_eq!(deleted, "x.png");
        assert!(!dir.path().join("x.png").exists());
    }

    #[tokio::test]
    async fn test_read_returns_content_and_type() {
        let (_dir, store) = store();
        store.save("Ray.JPG", b"JPEGDATA".to_vec()).await.unwrap();

        let (file, bytes) = store.read("Ray.JPG").await.unwrap();

        assert_eq!(file.name, "Ray.JPG");
        assert_eq!(file.content_type(), "image/jpeg");
        assert_eq!(bytes, b"JPEGDATA");
    }

    #[tokio::test]
    async fn test_read_hides_non_images() {
        let (dir, store) = store();
        fs::write(dir.path().join("notes.txt"), b"secret").unwrap();

        let result = store.read("notes.txt").await;

        assert_eq!(result, Err(StoreError::NotFound("notes.txt".to_string())));
    }

    #[tokio::test]
    async fn test_read_missing_and_empty() {
        let (_dir, store) = store();

        assert_eq!(
            store.read("ghost.png").await,
            Err(StoreError::NotFound("ghost.png".to_string()))
        );
        assert_eq!(store.read("../").await, Err(StoreError::NoTarget));
    }

    #[tokio::test]
    async fn test_delete_never_written_is_not_found() {
        let (_dir, store) = store();

        let result = store.delete(Some("ghost.png")).await;

        assert_eq!(result, Err(StoreError::NotFound("ghost.png".to_string())));
    }

    #[tokio::test]
    async fn test_delete_without_target() {
        let (_dir, store) = store();

        assert_eq!(store.delete(None).await, Err(StoreError::NoTarget));
        assert_eq!(store.delete(Some("")).await, Err(StoreError::NoTarget));
        assert_eq!(store.delete(Some("../..")).await, Err(StoreError::NoTarget));
    }

    #[tokio::test]
    async fn test_delete_cannot_escape_root() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("images");
        let store = FsMediaStore::new(&root).unwrap();
        let victim = outer.path().join("victim.png");
        fs::write(&victim, b"keep me").unwrap();

        let result = store.delete(Some("../victim.png")).await;

        assert_eq!(result, Err(StoreError::NotFound("victim.png".to_string())));
        assert!(victim.exists());
    }

    #[tokio::test]
    async fn test_delete_directory_is_system_failure() {
        let (dir, store) = store();
        fs::create_dir(dir.path().join("folder")).unwrap();

        let result = store.delete(Some("folder")).await;

        assert!(matches!(result, Err(StoreError::SystemFailure(_))));
        assert!(dir.path().join("folder").is_dir());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_of_different_names() {
        let (_dir, store) = store();
        let store = std::sync::Arc::new(store);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .save(&format!("ray-{i:02}.png"), vec![i as u8; 1024])
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let names = store.list().await.unwrap();
        assert_eq!(names.len(), 16);
        assert_eq!(names[0], "ray-00.png");
        assert_eq!(names[15], "ray-15.png");
    }
}
