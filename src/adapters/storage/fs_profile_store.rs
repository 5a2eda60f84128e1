//! Filesystem storage adapter for parsed profiles.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::StartupProfile;
use crate::ports::{ProfileStore, StoreError};

/// Filesystem-based profile storage.
///
/// Writes one JSON file per parsed deck into a configurable output
/// directory, named `{sanitized-company-name}_profile_{YYYYMMDDHHMMSS}.json`.
pub struct FsProfileStore {
    output_dir: PathBuf,
}

impl FsProfileStore {
    /// Create new filesystem storage with the output directory
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Keeps alphanumerics, spaces, underscores, and hyphens; trims
    /// trailing whitespace.
    fn sanitize_company_name(name: &str) -> String {
        name.chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Derives the artifact file name for a company at a point in time.
    fn file_name(company_name: &str, at: DateTime<Local>) -> String {
        format!(
            "{}_profile_{}.json",
            Self::sanitize_company_name(company_name),
            at.format("%Y%m%d%H%M%S")
        )
    }
}

#[async_trait]
impl ProfileStore for FsProfileStore {
    async fn save(&self, profile: &StartupProfile) -> Result<PathBuf, StoreError> {
        if profile.company_name.is_empty() {
            return Err(StoreError::EmptyCompanyName);
        }

        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to create output directory: {}", e)))?;

        let path = self
            .output_dir
            .join(Self::file_name(&profile.company_name, Local::now()));

        fs::write(&path, json)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write profile: {}", e)))?;

        tracing::info!(path = %path.display(), "profile saved");
        Ok(path)
    }
}
