use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection resolves the data directory and the path of each donor
/// document within it.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at an explicit base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        let donors_dir = base_path.join("donors");
        if !donors_dir.exists() {
            fs::create_dir_all(&donors_dir)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory.
    ///
    /// `DONOR_DATA_DIR` overrides the location; otherwise the directory lives
    /// under the user's Documents folder.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("DONOR_DATA_DIR") {
            info!("Using data directory from DONOR_DATA_DIR: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Blood Donor Directory");
        info!("Using default data directory: {}", data_dir.display());

        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Directory holding one JSON document per donor
    pub fn donors_directory(&self) -> PathBuf {
        self.base_directory.join("donors")
    }

    /// Path of a single donor document
    pub fn donor_document_path(&self, donor_id: &str) -> PathBuf {
        self.donors_directory().join(format!("{}.json", donor_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_donors_directory() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        assert!(connection.donors_directory().is_dir());
        assert_eq!(connection.base_directory(), temp_dir.path());
    }

    #[test]
    fn test_donor_document_path_layout() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        let path = connection.donor_document_path("abc-123");
        assert_eq!(path, temp_dir.path().join("donors").join("abc-123.json"));
    }
}
