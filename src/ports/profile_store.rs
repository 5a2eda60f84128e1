//! Profile Store Port - Interface for persisting finished profiles.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::StartupProfile;

/// Port for profile persistence.
///
/// Persistence is best-effort from the caller's point of view: a failed
/// save is logged and never changes the HTTP response already being built.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Writes the profile and returns the path of the stored artifact.
    async fn save(&self, profile: &StartupProfile) -> Result<PathBuf, StoreError>;
}

/// Profile persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Profiles without a company name are never written.
    #[error("cannot save a profile without a company name")]
    EmptyCompanyName,

    /// Serializing the profile failed.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Creating the output directory or writing the file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
