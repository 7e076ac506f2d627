//! Run configuration for the CLI.
//!
//! Values are layered: command-line arguments override the optional TOML file,
//! which overrides [`defaults::DefaultsConfig`].

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
