//! Portfolio media storage with staged two-phase writes.
//!
//! Uploads land in `<root>/staging/` first; the record is written to the
//! database while the file is still staged, and only then is the file
//! committed (renamed) into the media root. On any failure after staging,
//! the staged file is removed, so a rejected request never leaves an
//! orphaned file. The remaining inconsistency window is a crash between the
//! record write and the commit rename.

use std::io;
use std::path::PathBuf;

use uuid::Uuid;

/// Name of the staging subdirectory under the media root.
const STAGING_DIR: &str = "staging";

/// A file written to the staging area, not yet visible in the media root.
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
}

/// Filesystem store for portfolio media.
#[derive(Debug)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Create a store rooted at `root`. Directories are created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of a committed file.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Whether a committed file exists.
    pub async fn exists(&self, file_name: &str) -> bool {
        tokio::fs::try_exists(self.path_for(file_name))
            .await
            .unwrap_or(false)
    }

    /// Phase one: write the upload bytes to the staging area.
    pub async fn stage(&self, data: &[u8]) -> io::Result<StagedUpload> {
        let staging = self.root.join(STAGING_DIR);
        tokio::fs::create_dir_all(&staging).await?;

        let path = staging.join(format!("{}.part", Uuid::new_v4()));
        tokio::fs::write(&path, data).await?;
        Ok(StagedUpload { path })
    }

    /// Phase two: move a staged file into the media root under its final
    /// name.
    pub async fn commit(&self, staged: StagedUpload, file_name: &str) -> io::Result<()> {
        let target = self.path_for(file_name);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::rename(&staged.path, &target).await
    }

    /// Remove a staged file after a failed request. Best-effort: a missing
    /// file is fine, other errors are logged.
    pub async fn discard(&self, staged: StagedUpload) {
        if let Err(e) = tokio::fs::remove_file(&staged.path).await {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %staged.path.display(), error = %e, "Failed to discard staged upload");
            }
        }
    }

    /// Remove a committed file. Idempotent: returns `Ok(false)` when the
    /// file was already absent.
    pub async fn remove(&self, file_name: &str) -> io::Result<bool> {
        match tokio::fs::remove_file(self.path_for(file_name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
