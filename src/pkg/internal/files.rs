use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::prelude::{Error, Result};

/// Local storage for uploaded resumes. Files are written under a generated
/// UUID key; the client-supplied filename is only kept as metadata.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct StoredResume {
    pub path: String,
    pub original_name: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    pub async fn save(&self, filename: &str, content: &[u8]) -> Result<StoredResume> {
        if filename.is_empty() {
            return Err(Error::Validation("resume filename must not be empty".into()));
        }
        fs::create_dir_all(&self.root).await?;
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin")
            .to_lowercase();
        let path = self.root.join(format!("{}.{}", Uuid::new_v4(), ext));
        fs::write(&path, content).await?;
        tracing::debug!("stored resume {:?} at {}", filename, path.display());
        Ok(StoredResume {
            path: path.to_string_lossy().into_owned(),
            original_name: filename.to_string(),
        })
    }
}
