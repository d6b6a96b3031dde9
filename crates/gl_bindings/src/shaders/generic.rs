//! Dimension markers and the generic vertex attribute layout shared by all shaders
//!
//! Every shader reads the same inputs from the same locations, so one mesh
//! can be drawn with any of them.

use std::marker::PhantomData;

use crate::foundation::math::{Mat3, Mat4};
use crate::gl::{Attribute, AttributeComponents, AttributeDataType, AttributeKind, GlResult, UniformValue};
use crate::shaders::uniform::UniformInput;

/// Location of the vertex position
pub const POSITION_LOCATION: u32 = 0;
/// Location of the texture coordinates
pub const TEXTURE_COORDINATES_LOCATION: u32 = 1;
/// Location of the vertex normal
pub const NORMAL_LOCATION: u32 = 2;
/// Location of the vertex color
pub const COLOR_LOCATION: u32 = 3;

/// Dimension count of a shader
pub trait Dimensions: 'static {
    /// 2 or 3
    const COUNT: u32;

    /// Components of a position attribute
    fn position_components() -> AttributeComponents;

    /// Identity transformation in homogeneous coordinates
    fn identity_transformation() -> UniformValue;

    /// Shape-check a homogeneous transformation: 3x3 in 2D, 4x4 in 3D
    fn transformation(input: UniformInput, uniform: &str) -> GlResult<UniformValue>;
}

/// Two-dimensional shaders
#[derive(Debug, Clone, Copy)]
pub struct Dim2;

/// Three-dimensional shaders
#[derive(Debug, Clone, Copy)]
pub struct Dim3;

impl Dimensions for Dim2 {
    const COUNT: u32 = 2;

    fn position_components() -> AttributeComponents {
        AttributeComponents::Two
    }

    fn identity_transformation() -> UniformValue {
        UniformValue::Mat3(Mat3::identity())
    }

    fn transformation(input: UniformInput, uniform: &str) -> GlResult<UniformValue> {
        input.into_mat3(uniform).map(UniformValue::Mat3)
    }
}

impl Dimensions for Dim3 {
    const COUNT: u32 = 3;

    fn position_components() -> AttributeComponents {
        AttributeComponents::Three
    }

    fn identity_transformation() -> UniformValue {
        UniformValue::Mat4(Mat4::identity())
    }

    fn transformation(input: UniformInput, uniform: &str) -> GlResult<UniformValue> {
        input.into_mat4(uniform).map(UniformValue::Mat4)
    }
}

/// Generic attribute definitions for `D`-dimensional shaders
#[derive(Debug, Clone, Copy)]
pub struct GenericAttributes<D: Dimensions>(PhantomData<D>);

/// Attributes of 2D shaders
pub type Generic2D = GenericAttributes<Dim2>;

/// Attributes of 3D shaders
pub type Generic3D = GenericAttributes<Dim3>;

impl<D: Dimensions> GenericAttributes<D> {
    /// Vertex position, two or three floats
    pub fn position() -> Attribute {
        float_attribute(POSITION_LOCATION, D::position_components())
    }

    /// Texture coordinates, two floats
    pub fn texture_coordinates() -> Attribute {
        float_attribute(TEXTURE_COORDINATES_LOCATION, AttributeComponents::Two)
    }

    /// Vertex normal, three floats
    pub fn normal() -> Attribute {
        float_attribute(NORMAL_LOCATION, AttributeComponents::Three)
    }

    /// RGB vertex color
    pub fn color3() -> Attribute {
        float_attribute(COLOR_LOCATION, AttributeComponents::Three)
    }

    /// RGBA vertex color
    pub fn color4() -> Attribute {
        float_attribute(COLOR_LOCATION, AttributeComponents::Four)
    }
}

fn float_attribute(location: u32, components: AttributeComponents) -> Attribute {
    Attribute::new_unchecked(AttributeKind::Generic, location, components, AttributeDataType::Float)
}
