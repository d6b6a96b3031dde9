//! Flat shader
//!
//! Draws a mesh in a single color, optionally multiplied by a texture.

use std::marker::PhantomData;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::foundation::math::colors;
use crate::gl::{GlError, GlResult, ProgramId, UniformValue};
use crate::shaders::generic::{Dim2, Dim3, Dimensions};
use crate::shaders::program::ShaderProgram;
use crate::shaders::uniform::UniformInput;

/// Uniform location of the transformation and projection matrix
pub const TRANSFORMATION_PROJECTION_MATRIX_LOCATION: u32 = 0;
/// Uniform location of the color
pub const COLOR_LOCATION: u32 = 1;
/// Uniform location of the alpha mask threshold
pub const ALPHA_MASK_LOCATION: u32 = 2;

bitflags! {
    /// Flat shader flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FlatFlags: u32 {
        /// No optional features
        const NONE = 0;
        /// Multiply the color with a texture
        const TEXTURED = 1 << 0;
        /// Discard fragments below the alpha mask threshold
        const ALPHA_MASK = 1 << 1;
        /// Multiply the color with the vertex color attribute
        const VERTEX_COLOR = 1 << 2;
    }
}

/// Flat shader for `D`-dimensional meshes
#[derive(Debug)]
pub struct Flat<D: Dimensions> {
    program: ShaderProgram,
    flags: FlatFlags,
    _dimensions: PhantomData<D>,
}

/// 2D flat shader
pub type Flat2D = Flat<Dim2>;

/// 3D flat shader
pub type Flat3D = Flat<Dim3>;

impl<D: Dimensions> Flat<D> {
    /// Create the shader in the current context
    ///
    /// Starts with an identity transformation, white color and, with
    /// [`FlatFlags::ALPHA_MASK`], a threshold of 0.5.
    pub fn new(flags: FlatFlags) -> GlResult<Self> {
        let program = ShaderProgram::create(format!("flat_{}d", D::COUNT))?;
        program.set_uniform(TRANSFORMATION_PROJECTION_MATRIX_LOCATION, D::identity_transformation())?;
        program.set_uniform(COLOR_LOCATION, UniformValue::Vec4(colors::white()))?;
        if flags.contains(FlatFlags::ALPHA_MASK) {
            program.set_uniform(ALPHA_MASK_LOCATION, UniformValue::Float(0.5))?;
        }
        Ok(Self { program, flags, _dimensions: PhantomData })
    }

    /// Flags the shader was created with
    pub fn flags(&self) -> FlatFlags {
        self.flags
    }

    /// Backend program handle
    pub fn program_id(&self) -> ProgramId {
        self.program.id()
    }

    /// Set the combined transformation and projection matrix
    pub fn set_transformation_projection_matrix(&mut self, matrix: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let value = D::transformation(matrix.into(), "transformation_projection_matrix")?;
        self.program.set_uniform(TRANSFORMATION_PROJECTION_MATRIX_LOCATION, value)?;
        Ok(self)
    }

    /// Set the color, RGB or RGBA
    pub fn set_color(&mut self, color: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let color = color.into().into_color4("color")?;
        self.program.set_uniform(COLOR_LOCATION, UniformValue::Vec4(color))?;
        Ok(self)
    }

    /// Set the alpha mask threshold
    ///
    /// # Errors
    /// `MissingFlag` unless created with [`FlatFlags::ALPHA_MASK`].
    pub fn set_alpha_mask(&mut self, mask: impl Into<UniformInput>) -> GlResult<&mut Self> {
        if !self.flags.contains(FlatFlags::ALPHA_MASK) {
            return Err(GlError::missing_flag("alpha_mask", FlatFlags::ALPHA_MASK));
        }
        let mask = mask.into().into_scalar("alpha_mask")?;
        self.program.set_uniform(ALPHA_MASK_LOCATION, UniformValue::Float(mask))?;
        Ok(self)
    }
}
