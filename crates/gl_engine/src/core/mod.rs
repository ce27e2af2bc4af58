//! # Core Engine Module
//!
//! Shared configuration types used by the engine and applications.

pub mod config;

pub use config::{ApplicationConfig, Config, ConfigError, GuiConfig, LoggingConfig, WindowConfig};
