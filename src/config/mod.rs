//! Configuration loading and management for the babysitter pay engine.
//!
//! This module provides the built-in rate table and functionality to load
//! alternative rate tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use babysitter_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/babysitting").unwrap();
//! println!("Loaded service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FamilyScheduleConfig, RateTable, RateTier, RatesConfig, ServiceMetadata, billable_hours,
};
