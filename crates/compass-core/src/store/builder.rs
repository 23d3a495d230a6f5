//! Builder for creating and configuring IntentStore instances.

use std::path::{Path, PathBuf};

use super::IntentStore;
use crate::error::{CompassError, Result};

/// Builder for creating and configuring IntentStore instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    root: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Sets the project root. If not specified, the current working directory
    /// is used.
    pub fn with_root<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.root = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store. Nothing is created on disk until
    /// [`IntentStore::init`] or [`IntentStore::create`] is called.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::FileSystem` if the current directory cannot be
    /// determined, and `CompassError::InvalidInput` if the root is not an
    /// existing directory.
    pub fn build(self) -> Result<IntentStore> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().map_err(|e| CompassError::file_system(".", e))?,
        };

        if !root.is_dir() {
            return Err(CompassError::invalid_input("root")
                .with_reason(format!("'{}' is not a directory", root.display())));
        }

        Ok(IntentStore::new(root))
    }
}
