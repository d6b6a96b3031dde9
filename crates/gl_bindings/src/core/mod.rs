//! # Core Module
//!
//! Shared configuration used by the GL and shader layers.

pub mod config;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    ContextConfig,
    ContextFlags,
    GlVersion,
    PhongDefaults,
    Config,
    ConfigError,
};
