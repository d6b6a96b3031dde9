//! # Unified Configuration System
//!
//! Configuration structures for the binding layer: how a context is
//! requested, what limits a headless context reports, and the shader
//! defaults an application starts from.
//!
//! ## Configuration Categories
//!
//! - **Context Config**: GL version, context flags, reported limits
//! - **Application Config**: Application name, log filter, shader defaults

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::gl::{GlError, GlResult};
use crate::shaders::PhongFlags;

/// Minimum number of vertex attributes every GL 3.3 / GLES 3.0 implementation provides
pub const DEFAULT_MAX_VERTEX_ATTRIBUTES: u32 = 16;

/// Minimum number of explicit uniform locations guaranteed by GL 4.3
pub const DEFAULT_MAX_UNIFORM_LOCATIONS: u32 = 1024;

/// Requested GL API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlVersion {
    /// OpenGL 3.3 core
    Gl330,
    /// OpenGL 4.1 core
    Gl410,
    /// OpenGL 4.3 core
    Gl430,
    /// OpenGL 4.5 core
    #[default]
    Gl450,
    /// OpenGL ES 3.0
    Gles300,
    /// OpenGL ES 3.2
    Gles320,
}

impl GlVersion {
    /// Whether this is an OpenGL ES version
    pub fn is_es(self) -> bool {
        matches!(self, Self::Gles300 | Self::Gles320)
    }

    /// `(major, minor)` version pair
    pub fn numbers(self) -> (u32, u32) {
        match self {
            Self::Gl330 => (3, 3),
            Self::Gl410 => (4, 1),
            Self::Gl430 => (4, 3),
            Self::Gl450 => (4, 5),
            Self::Gles300 => (3, 0),
            Self::Gles320 => (3, 2),
        }
    }
}

bitflags! {
    /// Context creation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ContextFlags: u32 {
        /// Debug context with `KHR_debug` output enabled
        const DEBUG = 1 << 0;
        /// Forward-compatible context, desktop GL only
        const FORWARD_COMPATIBLE = 1 << 1;
        /// Context without error reporting (`KHR_no_error`)
        const NO_ERROR = 1 << 2;
        /// Context with robust buffer access
        const ROBUST_ACCESS = 1 << 3;
    }
}

/// # Context Configuration
///
/// Describes the context an application asks for. The limits are what a
/// headless context reports; a driver-backed context reports its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested API version
    pub version: GlVersion,
    /// Context creation flags
    pub flags: ContextFlags,
    /// `GL_MAX_VERTEX_ATTRIBS` reported by a headless context
    pub max_vertex_attributes: u32,
    /// `GL_MAX_UNIFORM_LOCATIONS` reported by a headless context
    pub max_uniform_locations: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            version: GlVersion::default(),
            flags: ContextFlags::empty(),
            max_vertex_attributes: DEFAULT_MAX_VERTEX_ATTRIBUTES,
            max_uniform_locations: DEFAULT_MAX_UNIFORM_LOCATIONS,
        }
    }
}

impl ContextConfig {
    /// Set the requested version
    pub fn with_version(mut self, version: GlVersion) -> Self {
        self.version = version;
        self
    }

    /// Set context flags
    pub fn with_flags(mut self, flags: ContextFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the limits a headless context reports
    pub fn with_limits(mut self, max_vertex_attributes: u32, max_uniform_locations: u32) -> Self {
        self.max_vertex_attributes = max_vertex_attributes;
        self.max_uniform_locations = max_uniform_locations;
        self
    }

    /// Check the configuration for combinations no driver accepts
    pub fn validate(&self) -> GlResult<()> {
        if self.flags.contains(ContextFlags::DEBUG | ContextFlags::NO_ERROR) {
            return Err(GlError::InvalidArgument(
                "DEBUG and NO_ERROR context flags are mutually exclusive".to_string(),
            ));
        }
        if self.version.is_es() && self.flags.contains(ContextFlags::FORWARD_COMPATIBLE) {
            return Err(GlError::InvalidArgument(format!(
                "FORWARD_COMPATIBLE is not available for {:?}",
                self.version
            )));
        }
        if self.max_vertex_attributes == 0 {
            return Err(GlError::InvalidArgument("max_vertex_attributes must be non-zero".to_string()));
        }
        if self.max_uniform_locations == 0 {
            return Err(GlError::InvalidArgument("max_uniform_locations must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Default Phong shader settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhongDefaults {
    /// Shader flags
    pub flags: PhongFlags,
    /// Number of lights
    pub light_count: u32,
    /// Specular shininess
    pub shininess: f32,
}

impl Default for PhongDefaults {
    fn default() -> Self {
        Self {
            flags: PhongFlags::NONE,
            light_count: 1,
            shininess: 80.0,
        }
    }
}

/// # Application Configuration
///
/// Top-level configuration loaded by applications built on the bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Application name, used in log output
    pub name: String,
    /// `env_logger` filter string
    pub log_filter: String,
    /// Context request
    pub context: ContextConfig,
    /// Phong shader defaults
    pub phong: PhongDefaults,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "gl_bindings".to_string(),
            log_filter: "info".to_string(),
            context: ContextConfig::default(),
            phong: PhongDefaults::default(),
        }
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_config_is_valid() {
        let config = ContextConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_vertex_attributes, 16);
        assert_eq!(config.version.numbers(), (4, 5));
    }

    #[test]
    fn test_debug_and_no_error_are_exclusive() {
        let config = ContextConfig::default()
            .with_flags(ContextFlags::DEBUG | ContextFlags::NO_ERROR);
        assert!(matches!(config.validate(), Err(GlError::InvalidArgument(_))));
    }

    #[test]
    fn test_forward_compatible_rejected_on_es() {
        let config = ContextConfig::default()
            .with_version(GlVersion::Gles300)
            .with_flags(ContextFlags::FORWARD_COMPATIBLE);
        assert!(matches!(config.validate(), Err(GlError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let config = ContextConfig::default().with_limits(0, 1024);
        assert!(config.validate().is_err());
        let config = ContextConfig::default().with_limits(16, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_application_config_toml_round_trip() {
        let mut config = ApplicationConfig::default();
        config.name = "viewer".to_string();
        config.context.flags = ContextFlags::DEBUG | ContextFlags::ROBUST_ACCESS;
        config.phong.flags = PhongFlags::DIFFUSE_TEXTURE | PhongFlags::ALPHA_MASK;
        config.phong.light_count = 3;

        let text = config.render("app.toml").unwrap();
        let parsed = ApplicationConfig::parse("app.toml", &text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_application_config_ron_round_trip() {
        let mut config = ApplicationConfig::default();
        config.context.version = GlVersion::Gles320;

        let text = config.render("app.ron").unwrap();
        let parsed = ApplicationConfig::parse("app.ron", &text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let parsed = ApplicationConfig::parse("app.toml", "name = \"partial\"\n").unwrap();
        assert_eq!(parsed.name, "partial");
        assert_eq!(parsed.context, ContextConfig::default());
        assert_eq!(parsed.phong.light_count, 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ApplicationConfig::parse("app.json", "{}").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("gl_bindings_config_{}.toml", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let config = ApplicationConfig::default();
        config.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
