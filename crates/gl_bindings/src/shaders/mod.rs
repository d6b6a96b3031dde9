//! # Shader Uniform Proxies
//!
//! Host-side handles for the builtin shaders. Each proxy owns a program in
//! the current context and exposes its uniforms as typed setters.
//!
//! ## Architecture
//!
//! - **Input shaping**: setters take `impl Into<UniformInput>` and check
//!   the shape against what the uniform expects before anything is uploaded
//! - **Upload**: checked values become [`UniformValue`](crate::gl::UniformValue)s
//!   and go to the current context's backend at fixed locations
//! - **Attributes**: all shaders share the [`generic`] vertex attribute layout
//!
//! ## Design Goals
//!
//! - Rejected values never reach the driver
//! - Setters chain: every setter returns `GlResult<&mut Self>`

pub mod flat;
pub mod generic;
pub mod phong;
pub mod program;
pub mod uniform;
pub mod vertex_color;

pub use flat::{Flat, Flat2D, Flat3D, FlatFlags};
pub use generic::{Dim2, Dim3, Dimensions, Generic2D, Generic3D, GenericAttributes};
pub use phong::{Phong, PhongFlags};
pub use program::ShaderProgram;
pub use uniform::UniformInput;
pub use vertex_color::{VertexColor, VertexColor2D, VertexColor3D};
