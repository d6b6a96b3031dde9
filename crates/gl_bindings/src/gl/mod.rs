//! # GL State Bindings
//!
//! Typed wrappers over the pieces of OpenGL state the shader layer needs:
//! the current context, vertex attribute descriptors, framebuffer clears,
//! pixel/mesh enums and the uniform values handed to the driver.
//!
//! ## Architecture
//!
//! - **Context**: owns a [`GlBackend`] and is made current per thread
//! - **Backend**: trait over the native driver, with an in-memory
//!   [`HeadlessBackend`] for tests and tools
//! - **Value types**: [`Attribute`], [`FramebufferClear`], [`PixelFormat`],
//!   [`UniformValue`]; validated on construction, immutable afterwards

pub mod attribute;
pub mod backend;
pub mod context;
pub mod error;
pub mod framebuffer;
pub mod mesh;
pub mod pixel;
pub mod uniform;

pub use attribute::{Attribute, AttributeComponents, AttributeDataType, AttributeKind};
pub use backend::{GlBackend, HeadlessBackend, ProgramId, ProgramState};
pub use context::{Context, CurrentContext};
pub use error::{GlError, GlResult};
pub use framebuffer::{DefaultFramebuffer, FramebufferClear};
pub use mesh::{MeshIndexType, MeshPrimitive};
pub use pixel::{DataProperties, PixelComponent, PixelFormat, PixelStorage};
pub use uniform::UniformValue;
