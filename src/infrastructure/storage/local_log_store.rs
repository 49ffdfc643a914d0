use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::application::ports::{LogStore, LogStoreError};
use crate::domain::LogFile;

/// Log files on the local filesystem, confined to one root directory.
pub struct LocalLogStore {
    root: PathBuf,
}

impl LocalLogStore {
    pub fn new(root: PathBuf) -> Result<Self, LogStoreError> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Resolves `log_type/filename` to a canonical path inside the root.
    async fn contained_path(&self, log_type: &str, filename: &str) -> Result<PathBuf, LogStoreError> {
        let requested = format!("{}/{}", log_type, filename);
        let relative = lexically_contained(&Path::new(log_type).join(filename))
            .ok_or_else(|| LogStoreError::AccessDenied(requested.clone()))?;

        let root = tokio::fs::canonicalize(&self.root).await?;
        let canonical = match tokio::fs::canonicalize(root.join(&relative)).await {
            Ok(path) => path,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(if missing_path_escapes(&root, &relative).await? {
                    LogStoreError::AccessDenied(requested)
                } else {
                    LogStoreError::NotFound(requested)
                });
            }
            Err(e) => return Err(LogStoreError::Io(e)),
        };

        if !canonical.starts_with(&root) {
            return Err(LogStoreError::AccessDenied(requested));
        }

        Ok(canonical)
    }
}

#[async_trait]
impl LogStore for LocalLogStore {
    async fn read(&self, log_type: &str, filename: &str) -> Result<LogFile, LogStoreError> {
        let path = self.contained_path(log_type, filename).await?;

        let metadata = tokio::fs::metadata(&path).await?;
        if !metadata.is_file() {
            return Err(LogStoreError::NotFound(format!("{}/{}", log_type, filename)));
        }

        let bytes = tokio::fs::read(&path).await?;
        let content =
            String::from_utf8(bytes).map_err(|e| LogStoreError::Decode(e.to_string()))?;

        Ok(LogFile {
            filename: filename.to_string(),
            size: metadata.len(),
            modified: to_utc(metadata.modified()?),
            content,
        })
    }

    async fn recent(&self, limit: usize) -> Result<Vec<String>, LogStoreError> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || recent_files(&root, limit))
            .await
            .map_err(|e| LogStoreError::Io(io::Error::other(e)))
    }
}

/// Normalizes `..` and `.` without touching the filesystem. `None` if the
/// path is absolute or climbs above its starting point.
fn lexically_contained(path: &Path) -> Option<PathBuf> {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts.into_iter().collect())
}

/// Walks a path that failed to canonicalize, one component at a time, looking
/// for a symlink that leads outside `root`. A dangling link counts by where its
/// target would be, so a missing file outside the root never reads as NotFound.
async fn missing_path_escapes(root: &Path, relative: &Path) -> Result<bool, LogStoreError> {
    let mut current = root.to_path_buf();
    for component in relative.components() {
        current.push(component);

        let metadata = match tokio::fs::symlink_metadata(&current).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(LogStoreError::Io(e)),
        };
        if !metadata.file_type().is_symlink() {
            continue;
        }

        match tokio::fs::canonicalize(&current).await {
            Ok(resolved) if resolved.starts_with(root) => current = resolved,
            Ok(_) => return Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let target = tokio::fs::read_link(&current).await?;
                let parent = current.parent().unwrap_or(root);
                return Ok(!lexically_normalized(&parent.join(target)).starts_with(root));
            }
            Err(e) => return Err(LogStoreError::Io(e)),
        }
    }
    Ok(false)
}

/// Resolves `.` and `..` against an absolute path without touching the filesystem.
fn lexically_normalized(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
}

fn recent_files(root: &Path, limit: usize) -> Vec<String> {
    let mut files: Vec<(SystemTime, String)> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let modified = entry.metadata().ok()?.modified().ok()?;
            let relative = entry.path().strip_prefix(root).ok()?;
            Some((modified, relative.to_string_lossy().into_owned()))
        })
        .collect();

    files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    files.truncate(limit);
    files.into_iter().map(|(_, path)| path).collect()
}

fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}
