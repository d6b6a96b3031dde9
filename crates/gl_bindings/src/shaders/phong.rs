//! # Phong Shader
//!
//! Blinn-Phong lighting with a configurable number of point lights.
//!
//! ## Uniform Layout
//!
//! Fixed locations for the matrices and material, followed by one location
//! per light for positions and then one per light for colors:
//!
//! | Uniform                 | Location             |
//! |-------------------------|----------------------|
//! | `transformation_matrix` | 0                    |
//! | `projection_matrix`     | 1                    |
//! | `normal_matrix`         | 2                    |
//! | `ambient_color`         | 4                    |
//! | `diffuse_color`         | 5                    |
//! | `specular_color`        | 6                    |
//! | `shininess`             | 7                    |
//! | `alpha_mask`            | 8                    |
//! | `light_positions`       | 10                   |
//! | `light_colors`          | 10 + `light_count`   |

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::foundation::math::{colors, Mat3, Mat4, Vec3};
use crate::gl::{Context, GlError, GlResult, ProgramId, UniformValue};
use crate::shaders::program::ShaderProgram;
use crate::shaders::uniform::UniformInput;

/// Uniform location of the transformation matrix
pub const TRANSFORMATION_MATRIX_LOCATION: u32 = 0;
/// Uniform location of the projection matrix
pub const PROJECTION_MATRIX_LOCATION: u32 = 1;
/// Uniform location of the normal matrix
pub const NORMAL_MATRIX_LOCATION: u32 = 2;
/// Uniform location of the ambient color
pub const AMBIENT_COLOR_LOCATION: u32 = 4;
/// Uniform location of the diffuse color
pub const DIFFUSE_COLOR_LOCATION: u32 = 5;
/// Uniform location of the specular color
pub const SPECULAR_COLOR_LOCATION: u32 = 6;
/// Uniform location of the shininess
pub const SHININESS_LOCATION: u32 = 7;
/// Uniform location of the alpha mask threshold
pub const ALPHA_MASK_LOCATION: u32 = 8;
/// First uniform location of the light positions
pub const LIGHT_POSITIONS_LOCATION: u32 = 10;

/// Shininess uploaded on construction
pub const DEFAULT_SHININESS: f32 = 80.0;

/// Alpha mask threshold uploaded on construction
pub const DEFAULT_ALPHA_MASK: f32 = 0.5;

bitflags! {
    /// Phong shader flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PhongFlags: u32 {
        /// No optional features
        const NONE = 0;
        /// Multiply the ambient color with a texture
        const AMBIENT_TEXTURE = 1 << 0;
        /// Multiply the diffuse color with a texture
        const DIFFUSE_TEXTURE = 1 << 1;
        /// Multiply the specular color with a texture
        const SPECULAR_TEXTURE = 1 << 2;
        /// Discard fragments below the alpha mask threshold
        const ALPHA_MASK = 1 << 3;
        /// Perturb normals with a normal map
        const NORMAL_TEXTURE = 1 << 4;
        /// Multiply the diffuse color with the vertex color attribute
        const VERTEX_COLOR = 1 << 5;
    }
}

/// Phong shader uniform proxy
#[derive(Debug)]
pub struct Phong {
    program: ShaderProgram,
    flags: PhongFlags,
    light_count: u32,
}

impl Phong {
    /// Create the shader in the current context
    ///
    /// # Errors
    /// - `InvalidArgument` for zero lights, or more lights than the
    ///   context has uniform locations for
    /// - `ContextMissing` without a current context
    pub fn new(flags: PhongFlags, light_count: u32) -> GlResult<Self> {
        if light_count == 0 {
            log::warn!("Rejected Phong shader with zero lights");
            return Err(GlError::InvalidArgument("light count must be positive".to_string()));
        }

        let required = u64::from(LIGHT_POSITIONS_LOCATION) + 2 * u64::from(light_count);
        Context::with_current(|context| {
            let available = context.backend().max_uniform_locations();
            if required > u64::from(available) {
                log::warn!("{} lights need {} uniform locations, context has {}", light_count, required, available);
                return Err(GlError::InvalidArgument(format!(
                    "{light_count} lights need {required} uniform locations, only {available} available"
                )));
            }
            Ok(())
        })?;

        let program = ShaderProgram::create(format!("phong_{light_count}_lights"))?;
        let mut shader = Self { program, flags, light_count };
        shader.upload_defaults()?;
        Ok(shader)
    }

    /// Create the shader with a single light
    pub fn with_flags(flags: PhongFlags) -> GlResult<Self> {
        Self::new(flags, 1)
    }

    /// Create the shader without flags and with a single light
    pub fn create() -> GlResult<Self> {
        Self::new(PhongFlags::NONE, 1)
    }

    fn upload_defaults(&mut self) -> GlResult<()> {
        let ambient = if self.flags.contains(PhongFlags::AMBIENT_TEXTURE) {
            colors::white()
        } else {
            colors::opaque_black()
        };
        let lights = self.light_count as usize;

        self.upload(TRANSFORMATION_MATRIX_LOCATION, UniformValue::Mat4(Mat4::identity()))?;
        self.upload(PROJECTION_MATRIX_LOCATION, UniformValue::Mat4(Mat4::identity()))?;
        self.upload(NORMAL_MATRIX_LOCATION, UniformValue::Mat3(Mat3::identity()))?;
        self.upload(AMBIENT_COLOR_LOCATION, UniformValue::Vec4(ambient))?;
        self.upload(DIFFUSE_COLOR_LOCATION, UniformValue::Vec4(colors::white()))?;
        self.upload(SPECULAR_COLOR_LOCATION, UniformValue::Vec4(colors::white()))?;
        self.upload(SHININESS_LOCATION, UniformValue::Float(DEFAULT_SHININESS))?;
        if self.flags.contains(PhongFlags::ALPHA_MASK) {
            self.upload(ALPHA_MASK_LOCATION, UniformValue::Float(DEFAULT_ALPHA_MASK))?;
        }
        self.upload(LIGHT_POSITIONS_LOCATION, UniformValue::Vec3Array(vec![Vec3::zeros(); lights]))?;
        self.upload(self.light_colors_location(), UniformValue::Vec4Array(vec![colors::white(); lights]))?;
        Ok(())
    }

    fn upload(&self, location: u32, value: UniformValue) -> GlResult<()> {
        self.program.set_uniform(location, value)
    }

    /// Flags the shader was created with
    pub fn flags(&self) -> PhongFlags {
        self.flags
    }

    /// Number of lights
    pub fn light_count(&self) -> u32 {
        self.light_count
    }

    /// Backend program handle
    pub fn program_id(&self) -> ProgramId {
        self.program.id()
    }

    /// First uniform location of the light colors
    pub fn light_colors_location(&self) -> u32 {
        LIGHT_POSITIONS_LOCATION + self.light_count
    }

    /// Set the ambient color, RGB or RGBA
    pub fn set_ambient_color(&mut self, color: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let color = color.into().into_color4("ambient_color")?;
        self.upload(AMBIENT_COLOR_LOCATION, UniformValue::Vec4(color))?;
        Ok(self)
    }

    /// Set the diffuse color, RGB or RGBA
    pub fn set_diffuse_color(&mut self, color: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let color = color.into().into_color4("diffuse_color")?;
        self.upload(DIFFUSE_COLOR_LOCATION, UniformValue::Vec4(color))?;
        Ok(self)
    }

    /// Set the specular color, RGB or RGBA
    pub fn set_specular_color(&mut self, color: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let color = color.into().into_color4("specular_color")?;
        self.upload(SPECULAR_COLOR_LOCATION, UniformValue::Vec4(color))?;
        Ok(self)
    }

    /// Set the specular exponent
    pub fn set_shininess(&mut self, shininess: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let shininess = shininess.into().into_scalar("shininess")?;
        self.upload(SHININESS_LOCATION, UniformValue::Float(shininess))?;
        Ok(self)
    }

    /// Set the alpha mask threshold
    ///
    /// # Errors
    /// `MissingFlag` unless created with [`PhongFlags::ALPHA_MASK`].
    pub fn set_alpha_mask(&mut self, mask: impl Into<UniformInput>) -> GlResult<&mut Self> {
        if !self.flags.contains(PhongFlags::ALPHA_MASK) {
            log::warn!("alpha_mask set on a Phong shader created with {:?}", self.flags);
            return Err(GlError::missing_flag("alpha_mask", PhongFlags::ALPHA_MASK));
        }
        let mask = mask.into().into_scalar("alpha_mask")?;
        self.upload(ALPHA_MASK_LOCATION, UniformValue::Float(mask))?;
        Ok(self)
    }

    /// Set the object transformation, 4x4
    pub fn set_transformation_matrix(&mut self, matrix: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let matrix = matrix.into().into_mat4("transformation_matrix")?;
        self.upload(TRANSFORMATION_MATRIX_LOCATION, UniformValue::Mat4(matrix))?;
        Ok(self)
    }

    /// Set the normal matrix, 3x3
    pub fn set_normal_matrix(&mut self, matrix: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let matrix = matrix.into().into_mat3("normal_matrix")?;
        self.upload(NORMAL_MATRIX_LOCATION, UniformValue::Mat3(matrix))?;
        Ok(self)
    }

    /// Set the projection matrix, 4x4
    pub fn set_projection_matrix(&mut self, matrix: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let matrix = matrix.into().into_mat4("projection_matrix")?;
        self.upload(PROJECTION_MATRIX_LOCATION, UniformValue::Mat4(matrix))?;
        Ok(self)
    }

    /// Set one position per light
    ///
    /// # Errors
    /// `ShapeMismatch` unless the list has exactly [`Self::light_count`]
    /// three-component entries.
    pub fn set_light_positions(&mut self, positions: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let positions = positions.into().into_vec3_list("light_positions", self.light_count as usize)?;
        self.upload(LIGHT_POSITIONS_LOCATION, UniformValue::Vec3Array(positions))?;
        Ok(self)
    }

    /// Set one RGB or RGBA color per light
    pub fn set_light_colors(&mut self, colors: impl Into<UniformInput>) -> GlResult<&mut Self> {
        let colors = colors.into().into_color4_list("light_colors", self.light_count as usize)?;
        self.upload(self.light_colors_location(), UniformValue::Vec4Array(colors))?;
        Ok(self)
    }
}
