//! # GL Bindings
//!
//! Type-safe OpenGL flag, vertex attribute and shader uniform bindings.
//!
//! ## Features
//!
//! - **Flag Types**: `bitflags`-backed masks with union, intersection and complement
//! - **Attributes**: validated, immutable vertex attribute descriptors
//! - **Shader Proxies**: Phong, Flat and VertexColor uniforms with shape checking
//! - **Headless Backend**: in-memory driver stand-in for tests and tools
//! - **Configuration**: TOML and RON context/application configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bindings::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let _current = Context::headless(ContextConfig::default())?.make_current()?;
//!
//!     let mut phong = Phong::new(PhongFlags::DIFFUSE_TEXTURE | PhongFlags::ALPHA_MASK, 2)?;
//!     phong
//!         .set_diffuse_color((0.5, 1.0, 0.9))?
//!         .set_light_positions(vec![(0.5, 1.0, 0.3), (-1.0, 2.0, 0.0)])?;
//!
//!     DefaultFramebuffer::clear(FramebufferClear::COLOR | FramebufferClear::DEPTH)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod gl;
pub mod shaders;

#[cfg(test)]
mod tests;

/// Common imports for binding users
pub mod prelude {
    pub use crate::{
        core::{ApplicationConfig, Config, ContextConfig, ContextFlags, GlVersion},
        foundation::math::{colors, Color3, Color4, Deg, Mat3, Mat4, Rad, Vec2, Vec3, Vec4},
        gl::{
            Attribute, AttributeComponents, AttributeDataType, AttributeKind, Context, CurrentContext,
            DefaultFramebuffer, FramebufferClear, GlError, GlResult,
        },
        shaders::{
            Flat2D, Flat3D, FlatFlags, Generic2D, Generic3D, Phong, PhongFlags, UniformInput, VertexColor2D,
            VertexColor3D,
        },
    };
}
