use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::fs;

use crate::menu::WeekMenu;

/// The week menu persisted as JSON at a fixed path.
#[derive(Debug)]
pub struct FileStore(PathBuf);

impl FileStore {
    pub fn open(p: impl AsRef<Path>) -> Self {
        Self(p.as_ref().to_owned())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub async fn load(&self) -> crate::Result<Option<WeekMenu>> {
        match fs::read(&self.0).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces any previous record.
    pub async fn save(&self, value: &WeekMenu) -> crate::Result<()> {
        if let Some(parent) = self.0.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(&self.0, json).await?;
        Ok(())
    }

    /// Returns whether there was a record to remove.
    pub async fn clear(&self) -> crate::Result<bool> {
        match fs::remove_file(&self.0).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
