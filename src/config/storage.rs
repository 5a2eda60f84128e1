//! Storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory persisted profiles are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory uploaded files are spooled to per request
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__OUTPUT_DIR"));
        }
        if self.temp_dir.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__TEMP_DIR"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            temp_dir: default_temp_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_temp_dir() -> String {
    "temp_files".to_string()
}
