//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading babysitting
//! rate configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTable, RatesConfig, ServiceMetadata};

/// Loads and provides access to babysitting rate configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/babysitting/
/// ├── service.yaml   # Service metadata
/// └── rates.yaml     # Per-family rate tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use babysitter_pay::config::ConfigLoader;
/// use babysitter_pay::Job;
///
/// let loader = ConfigLoader::load("./config/babysitting")?;
/// println!("Loaded rates: {} {}", loader.service().name, loader.service().version);
///
/// let mut job = Job::with_rates(loader.rate_table().clone());
/// job.set_family("a")?;
/// # Ok::<(), babysitter_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    service: ServiceMetadata,
    rate_table: RateTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The rate table names an unknown family (`UnknownFamily`)
    /// - The rate table leaves gaps or overlaps (`InvalidRateTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceMetadata>(&path.join("service.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let rate_table = RateTable::from_config(rates)?;

        tracing::debug!(
            path = %path.display(),
            service = %service.name,
            version = %service.version,
            "Loaded rate configuration"
        );

        Ok(Self {
            service,
            rate_table,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        &self.service
    }

    /// Returns the validated rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }
}
