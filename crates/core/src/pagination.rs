//! Next-link cache for paginated list commands
//!
//! The Flock API reports the next page of a collection as a full URL,
//! which is too unwieldy to paste back into a terminal. List commands
//! cache the link in the filesystem under its MD5 hash and show the user
//! an 8-character hash prefix; `--after <prefix>` resolves the prefix
//! back to the stored URL.

use std::fs;
use std::path::Path;

/// Error type for next-link cache operations
#[derive(Debug)]
pub enum PaginationError {
    IoError(String),
    LinkNotFound(String),
    InvalidLinkHash(String),
}

impl std::fmt::Display for PaginationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaginationError::IoError(msg) => write!(f, "IO error: {}", msg),
            PaginationError::LinkNotFound(hash) => {
                write!(f, "Next-page token not found: {}. It may have expired.", hash)
            }
            PaginationError::InvalidLinkHash(msg) => {
                write!(f, "Invalid next-page token: {}", msg)
            }
        }
    }
}

impl std::error::Error for PaginationError {}

impl From<std::io::Error> for PaginationError {
    fn from(err: std::io::Error) -> Self {
        PaginationError::IoError(err.to_string())
    }
}

fn hash_link(link: &str) -> String {
    format!("{:x}", md5::compute(link.as_bytes()))
}

/// Cache a next-page link and return its 8-character hash prefix
pub fn cache_next_link(cache_dir: &Path, link: &str) -> Result<String, PaginationError> {
    fs::create_dir_all(cache_dir)?;

    let full_hash = hash_link(link);
    let link_path = cache_dir.join(&full_hash);

    fs::write(&link_path, link)?;

    Ok(full_hash[..8].to_string())
}

/// Resolve an 8-character hash prefix back into the cached link
pub fn resolve_next_link(cache_dir: &Path, hash_prefix: &str) -> Result<String, PaginationError> {
    if hash_prefix.len() != 8 {
        return Err(PaginationError::InvalidLinkHash(
            "token must be exactly 8 characters".to_string(),
        ));
    }

    if !hash_prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaginationError::InvalidLinkHash(
            "token must contain only hexadecimal characters".to_string(),
        ));
    }

    if !cache_dir.exists() {
        return Err(PaginationError::LinkNotFound(hash_prefix.to_string()));
    }

    for entry in fs::read_dir(cache_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
                // MD5 hashes are always 32 hex characters
                if filename.starts_with(hash_prefix) && filename.len() == 32 {
                    let link = fs::read_to_string(&path)?;
                    return Ok(link);
                }
            }
        }
    }

    Err(PaginationError::LinkNotFound(hash_prefix.to_string()))
}
