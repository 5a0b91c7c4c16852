//! Profile loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an instruction profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read profile {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ProfileError {
    /// Check if the profile file was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::NotFound { .. })
    }

    /// Check if the profile file held invalid or mis-shaped JSON
    pub fn is_malformed(&self) -> bool {
        matches!(self, ProfileError::Malformed { .. })
    }

    /// Path of the profile that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            ProfileError::NotFound { path } => path,
            ProfileError::Read { path, .. } => path,
            ProfileError::Malformed { path, .. } => path,
        }
    }
}
