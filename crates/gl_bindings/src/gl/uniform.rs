//! Typed uniform values as handed to a GL backend
//!
//! Layout follows `glUniform*`: matrices are column-major, arrays occupy
//! consecutive locations starting at the base location.

use crate::foundation::math::{Mat3, Mat4, Vec2, Vec3, Vec4};

/// A shape-checked uniform value
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// `float`
    Float(f32),
    /// `int` / sampler binding
    Int(i32),
    /// `vec2`
    Vec2(Vec2),
    /// `vec3`
    Vec3(Vec3),
    /// `vec4`
    Vec4(Vec4),
    /// `mat3`
    Mat3(Mat3),
    /// `mat4`
    Mat4(Mat4),
    /// `vec3[N]`
    Vec3Array(Vec<Vec3>),
    /// `vec4[N]`
    Vec4Array(Vec<Vec4>),
}

impl UniformValue {
    /// GLSL type name, used in diagnostics
    pub fn glsl_type(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Vec2(_) => "vec2",
            Self::Vec3(_) => "vec3",
            Self::Vec4(_) => "vec4",
            Self::Mat3(_) => "mat3",
            Self::Mat4(_) => "mat4",
            Self::Vec3Array(_) => "vec3[]",
            Self::Vec4Array(_) => "vec4[]",
        }
    }

    /// Number of uniform locations the value occupies
    pub fn location_count(&self) -> usize {
        match self {
            Self::Vec3Array(values) => values.len(),
            Self::Vec4Array(values) => values.len(),
            _ => 1,
        }
    }

    /// Raw bytes in upload order
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Float(value) => bytemuck::bytes_of(value).to_vec(),
            Self::Int(value) => bytemuck::bytes_of(value).to_vec(),
            Self::Vec2(value) => bytemuck::cast_slice(value.as_slice()).to_vec(),
            Self::Vec3(value) => bytemuck::cast_slice(value.as_slice()).to_vec(),
            Self::Vec4(value) => bytemuck::cast_slice(value.as_slice()).to_vec(),
            Self::Mat3(value) => bytemuck::cast_slice(value.as_slice()).to_vec(),
            Self::Mat4(value) => bytemuck::cast_slice(value.as_slice()).to_vec(),
            Self::Vec3Array(values) => flatten(values.iter().map(Vec3::as_slice)),
            Self::Vec4Array(values) => flatten(values.iter().map(Vec4::as_slice)),
        }
    }
}

fn flatten<'a>(parts: impl Iterator<Item = &'a [f32]>) -> Vec<u8> {
    let floats: Vec<f32> = parts.flatten().copied().collect();
    bytemuck::cast_slice(&floats).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_sizes() {
        assert_eq!(UniformValue::Float(1.0).to_bytes().len(), 4);
        assert_eq!(UniformValue::Mat3(Mat3::identity()).to_bytes().len(), 36);
        assert_eq!(UniformValue::Mat4(Mat4::identity()).to_bytes().len(), 64);
        assert_eq!(UniformValue::Vec3Array(vec![Vec3::zeros(); 3]).to_bytes().len(), 36);
    }

    #[test]
    fn test_matrix_bytes_are_column_major() {
        let m = Mat4::new_translation(&Vec3::new(7.0, 0.0, 0.0));
        let bytes = UniformValue::Mat4(m).to_bytes();
        // Translation lives in the last column
        let x: f32 = bytemuck::pod_read_unaligned(&bytes[48..52]);
        assert_eq!(x, 7.0);
    }

    #[test]
    fn test_array_location_count() {
        let value = UniformValue::Vec4Array(vec![Vec4::zeros(); 5]);
        assert_eq!(value.location_count(), 5);
        assert_eq!(UniformValue::Vec3(Vec3::zeros()).location_count(), 1);
    }
}
