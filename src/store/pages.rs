//! On-disk page store
//!
//! Writes fetched page bodies under a configured base directory, one
//! `.html` file per page, named by the filename codec.

use crate::naming;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem store for fetched pages
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    /// Creates the store, making the base directory if it does not exist
    ///
    /// # Arguments
    ///
    /// * `root` - Directory page files are written into
    pub fn create(root: &Path) -> io::Result<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Writes the fetched body for a URL, overwriting any previous save
    ///
    /// The filename is `<encoded-stem>.html`; re-saving the same URL is
    /// idempotent. Write failures are returned to the caller.
    ///
    /// # Returns
    ///
    /// The path the page was written to.
    pub fn save(&self, url: &str, content: &[u8]) -> io::Result<PathBuf> {
        let stem = naming::encode(url, self.root.as_os_str().len());
        let path = self.root.join(format!("{}.html", stem));
        fs::write(&path, content)?;
        Ok(path)
    }
}
