use std::path::Path;

use crate::errors::CoreError;
use crate::models::dataset::Dataset;

/// Writes the generated dataset to its destination file.
pub struct DatasetWriter;

impl DatasetWriter {
    /// Serialize the dataset as pretty-printed JSON and overwrite `path`,
    /// creating parent directories as needed (idempotent).
    pub fn write(dataset: &Dataset, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut json = serde_json::to_string_pretty(dataset)?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }
}
