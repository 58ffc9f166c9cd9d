//! Rate table loading from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateTable;

impl RateTable {
    /// Loads and validates a rate table from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rate table file (e.g., "./config/morocco_2025.yaml")
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file does not exist,
    /// [`EngineError::ConfigParseError`] if it contains invalid YAML, or
    /// [`EngineError::InvalidRateTable`] if the parsed table fails
    /// [`RateTable::validate`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::RateTable;
    ///
    /// let rates = RateTable::from_yaml_file("./config/morocco_2025.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let table: RateTable =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        table.validate()?;
        Ok(table)
    }
}
