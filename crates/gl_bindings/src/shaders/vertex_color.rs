//! Vertex color shader
//!
//! Draws a mesh colored by its per-vertex color attribute, without lighting.

use std::marker::PhantomData;

use crate::gl::{GlResult, ProgramId};
use crate::shaders::generic::{Dim2, Dim3, Dimensions};
use crate::shaders::program::ShaderProgram;
use crate::shaders::uniform::UniformInput;

/// Uniform location of the transformation and projection matrix
pub const TRANSFORMATION_PROJECTION_MATRIX_LOCATION: u32 = 0;

/// Vertex color shader for `D`-dimensional meshes
#[derive(Debug)]
pub struct VertexColor<D: Dimensions> {
    program: ShaderProgram,
    _dimensions: PhantomData<D>,
}

/// 2D vertex color shader
pub type VertexColor2D = VertexColor<Dim2>;

/// 3D vertex color shader
pub type VertexColor3D = VertexColor<Dim3>;

impl<D: Dimensions> VertexColor<D> {
    /// Create the shader in the current context
    ///
    /// # Errors
    /// `ContextMissing` without a current context.
    pub fn new() -> GlResult<Self> {
        let program = ShaderProgram::create(format!("vertex_color_{}d", D::COUNT))?;
        program.set_uniform(TRANSFORMATION_PROJECTION_MATRIX_LOCATION, D::identity_transformation())?;
        Ok(Self { program, _dimensions: PhantomData })
    }

    /// Backend program handle
    pub fn program_id(&self) -> ProgramId {
        self.program.id()
    }

    /// Set the combined transformation and projection matrix
    ///
    /// 3x3 for 2D shaders, 4x4 for 3D shaders.
    pub fn set_transformation_projection_matrix(&mut self, matrix: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let value = D::transformation(matrix.into(), "transformation_projection_matrix")?;
        self.program.set_uniform(TRANSFORMATION_PROJECTION_MATRIX_LOCATION, value)?;
        Ok(self)
    }
}
