//! Filename encoding for fetched pages
//!
//! Maps a URL to a filesystem-safe filename stem. Readable names are kept
//! where they fit; URLs whose sanitized form would overflow the path budget
//! fall back to a content-addressed SHA-256 digest of the original URL.

use sha2::{Digest, Sha256};

/// Path-length ceiling modeled for the target filesystem.
const MAX_PATH_LENGTH: usize = 255;

/// Room reserved for the `.html` extension and its separator.
const EXTENSION_RESERVE: usize = 5;

/// Encodes a URL as a filename stem (without extension)
///
/// Every character outside `[A-Za-z0-9.\-]` becomes `_`. The transform is
/// lossy; distinct URLs may collide and the last save wins. If the sanitized
/// stem would exceed the path budget left after `base_dir_len`, the stem is
/// instead the lowercase hex SHA-256 digest of the original, unsanitized
/// URL, which is always 64 characters and collision-resistant.
///
/// # Arguments
///
/// * `url` - The URL to encode
/// * `base_dir_len` - Length of the directory path the file will live under
pub fn encode(url: &str, base_dir_len: usize) -> String {
    let sanitized: String = url
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let max_len = MAX_PATH_LENGTH.saturating_sub(base_dir_len + EXTENSION_RESERVE);
    if sanitized.len() > max_len {
        hash_url(url)
    } else {
        sanitized
    }
}

/// Lowercase hex SHA-256 digest of a URL
fn hash_url(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
