use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fallback when the extension gives no hint
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Metadata reference to a file the user picked or dropped.
///
/// Contents are never read here; the transfer service opens `path` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub last_modified: SystemTime,
    ///Skip file path when serializing
    #[serde(skip)]
    pub path: PathBuf,
}

impl FileHandle {
    /// Build a handle from name and size alone, guessing the MIME type from the name
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let mime_type = guess_mime_type(&name).to_string();
        Self {
            name,
            size_bytes,
            mime_type,
            last_modified: SystemTime::now(),
            path: PathBuf::new(),
        }
    }

    /// Read metadata for a regular file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
        if !meta.is_file() {
            anyhow::bail!("Not a regular file: {}", path.display());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .context("Path has no file name")?;

        Ok(Self {
            mime_type: guess_mime_type(&name).to_string(),
            name,
            size_bytes: meta.len(),
            last_modified: meta.modified().unwrap_or(UNIX_EPOCH),
            path: path.to_path_buf(),
        })
    }
}

/// Guess a MIME type from the file extension
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = match file_name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => ext.to_ascii_lowercase(),
        _ => return DEFAULT_MIME_TYPE,
    };

    match ext.as_str() {
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => DEFAULT_MIME_TYPE,
    }
}
