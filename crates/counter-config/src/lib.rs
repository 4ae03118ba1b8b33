//! Configuration and file locations for counter-lander
//!
//! This crate provides:
//! - Directory utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (CounterConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::CounterConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
