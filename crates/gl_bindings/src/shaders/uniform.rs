//! Host-side uniform input and shape checking
//!
//! Setters accept anything convertible into [`UniformInput`]: plain floats,
//! tuples, arrays, slices, nalgebra vectors and matrices, and lists of
//! those. The shape is only checked when the value reaches a concrete
//! uniform, which knows what it expects.

use crate::foundation::math::{colors, Color4, Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::gl::{GlError, GlResult};

/// A uniform value as supplied by the caller, before shape checking
#[derive(Debug, Clone, PartialEq)]
pub enum UniformInput {
    /// A single number
    Scalar(f32),
    /// A flat sequence of numbers
    Vector(Vec<f32>),
    /// A matrix in column-major order
    Matrix {
        /// Column count
        cols: usize,
        /// Row count
        rows: usize,
        /// `cols * rows` values, column after column
        data: Vec<f32>,
    },
    /// A sequence of values, e.g. one per light
    List(Vec<UniformInput>),
}

pub(crate) fn shape_error(uniform: &str, expected: &str, found: &UniformInput) -> GlError {
    let found = found.describe();
    log::warn!("Rejected value for `{}`: expected {}, got {}", uniform, expected, found);
    GlError::shape(uniform, expected, found)
}

impl UniformInput {
    /// Human readable shape, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Scalar(_) => "a scalar".to_string(),
            Self::Vector(values) => format!("a {}-component vector", values.len()),
            Self::Matrix { cols, rows, .. } => format!("a {cols}x{rows} matrix"),
            Self::List(items) if items.len() == 1 => "a list of 1 element".to_string(),
            Self::List(items) => format!("a list of {} elements", items.len()),
        }
    }

    /// A single number
    pub fn into_scalar(self, uniform: &str) -> GlResult<f32> {
        match self {
            Self::Scalar(value) => Ok(value),
            Self::Vector(ref values) if values.len() == 1 => Ok(values[0]),
            other => Err(shape_error(uniform, "a scalar", &other)),
        }
    }

    /// A three-component vector
    pub fn into_vec3(self, uniform: &str) -> GlResult<Vec3> {
        match self {
            Self::Vector(ref values) if values.len() == 3 => Ok(Vec3::from_column_slice(values)),
            other => Err(shape_error(uniform, "a 3-component vector", &other)),
        }
    }

    /// An RGB or RGBA color, widened to RGBA with alpha 1
    pub fn into_color4(self, uniform: &str) -> GlResult<Color4> {
        match self {
            Self::Vector(ref values) if values.len() == 3 => {
                Ok(colors::with_alpha(Vec3::from_column_slice(values)))
            }
            Self::Vector(ref values) if values.len() == 4 => Ok(Vec4::from_column_slice(values)),
            other => Err(shape_error(uniform, "a 3- or 4-component color", &other)),
        }
    }

    /// A 3x3 matrix
    pub fn into_mat3(self, uniform: &str) -> GlResult<Mat3> {
        let data = self.into_square_matrix(uniform, 3)?;
        Ok(Mat3::from_column_slice(&data))
    }

    /// A 4x4 matrix
    pub fn into_mat4(self, uniform: &str) -> GlResult<Mat4> {
        let data = self.into_square_matrix(uniform, 4)?;
        Ok(Mat4::from_column_slice(&data))
    }

    /// Column-major data of an `n`x`n` matrix, given as a matrix or as a list of columns
    fn into_square_matrix(self, uniform: &str, n: usize) -> GlResult<Vec<f32>> {
        let expected = format!("a {n}x{n} matrix");
        match self {
            Self::Matrix { cols, rows, data } if cols == n && rows == n && data.len() == n * n => Ok(data),
            Self::List(ref columns)
                if columns.len() == n
                    && columns.iter().all(|c| matches!(c, Self::Vector(v) if v.len() == n)) =>
            {
                Ok(columns
                    .iter()
                    .flat_map(|column| match column {
                        Self::Vector(values) => values.clone(),
                        _ => Vec::new(),
                    })
                    .collect())
            }
            other => Err(shape_error(uniform, &expected, &other)),
        }
    }

    /// A list of exactly `count` three-component vectors
    pub fn into_vec3_list(self, uniform: &str, count: usize) -> GlResult<Vec<Vec3>> {
        self.into_list(uniform, count, "3-component vectors")?
            .into_iter()
            .map(|item| item.into_vec3(uniform))
            .collect()
    }

    /// A list of exactly `count` RGB or RGBA colors
    pub fn into_color4_list(self, uniform: &str, count: usize) -> GlResult<Vec<Color4>> {
        self.into_list(uniform, count, "colors")?
            .into_iter()
            .map(|item| item.into_color4(uniform))
            .collect()
    }

    fn into_list(self, uniform: &str, count: usize, what: &str) -> GlResult<Vec<Self>> {
        match self {
            Self::List(items) if items.len() == count => Ok(items),
            other => Err(shape_error(uniform, &format!("a list of {count} {what}"), &other)),
        }
    }
}

impl From<f32> for UniformInput {
    fn from(value: f32) -> Self {
        Self::Scalar(value)
    }
}

impl<const N: usize> From<[f32; N]> for UniformInput {
    fn from(values: [f32; N]) -> Self {
        Self::Vector(values.to_vec())
    }
}

impl From<&[f32]> for UniformInput {
    fn from(values: &[f32]) -> Self {
        Self::Vector(values.to_vec())
    }
}

impl From<Vec<f32>> for UniformInput {
    fn from(values: Vec<f32>) -> Self {
        Self::Vector(values)
    }
}

impl From<(f32, f32, f32)> for UniformInput {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::Vector(vec![x, y, z])
    }
}

impl From<(f32, f32, f32, f32)> for UniformInput {
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        Self::Vector(vec![x, y, z, w])
    }
}

impl From<Vec2> for UniformInput {
    fn from(value: Vec2) -> Self {
        Self::Vector(value.as_slice().to_vec())
    }
}

impl From<Vec3> for UniformInput {
    fn from(value: Vec3) -> Self {
        Self::Vector(value.as_slice().to_vec())
    }
}

impl From<Vec4> for UniformInput {
    fn from(value: Vec4) -> Self {
        Self::Vector(value.as_slice().to_vec())
    }
}

impl From<Mat3> for UniformInput {
    fn from(value: Mat3) -> Self {
        Self::Matrix { cols: 3, rows: 3, data: value.as_slice().to_vec() }
    }
}

impl From<Mat4> for UniformInput {
    fn from(value: Mat4) -> Self {
        Self::Matrix { cols: 4, rows: 4, data: value.as_slice().to_vec() }
    }
}

/// Nested arrays are read as columns
impl<const R: usize, const C: usize> From<[[f32; R]; C]> for UniformInput {
    fn from(columns: [[f32; R]; C]) -> Self {
        Self::Matrix {
            cols: C,
            rows: R,
            data: columns.iter().flatten().copied().collect(),
        }
    }
}

impl<const N: usize> From<Vec<[f32; N]>> for UniformInput {
    fn from(items: Vec<[f32; N]>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}

impl<const N: usize> From<&[[f32; N]]> for UniformInput {
    fn from(items: &[[f32; N]]) -> Self {
        Self::List(items.iter().copied().map(Self::from).collect())
    }
}

impl From<Vec<(f32, f32, f32)>> for UniformInput {
    fn from(items: Vec<(f32, f32, f32)>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}

impl From<Vec<Vec<f32>>> for UniformInput {
    fn from(items: Vec<Vec<f32>>) -> Self {
        Self::List(items.into_iter().map(Self::Vector).collect())
    }
}

impl From<Vec<Vec3>> for UniformInput {
    fn from(items: Vec<Vec3>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}

impl From<&[Vec3]> for UniformInput {
    fn from(items: &[Vec3]) -> Self {
        Self::List(items.iter().copied().map(Self::from).collect())
    }
}

impl From<Vec<Vec4>> for UniformInput {
    fn from(items: Vec<Vec4>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}

impl From<&[Vec4]> for UniformInput {
    fn from(items: &[Vec4]) -> Self {
        Self::List(items.iter().copied().map(Self::from).collect())
    }
}

impl From<Vec<UniformInput>> for UniformInput {
    fn from(items: Vec<UniformInput>) -> Self {
        Self::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_accepts_rgb_and_rgba() {
        let rgb = UniformInput::from((0.5, 1.0, 0.9)).into_color4("color").unwrap();
        assert_eq!(rgb, Vec4::new(0.5, 1.0, 0.9, 1.0));

        let rgba = UniformInput::from([0.1, 0.2, 0.3, 0.4]).into_color4("color").unwrap();
        assert_eq!(rgba, Vec4::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn test_color_rejects_other_lengths() {
        let err = UniformInput::from([1.0, 0.0]).into_color4("diffuse_color").unwrap_err();
        assert_eq!(
            err,
            GlError::shape("diffuse_color", "a 3- or 4-component color", "a 2-component vector")
        );
        assert!(UniformInput::from(1.0).into_color4("diffuse_color").is_err());
    }

    #[test]
    fn test_matrix_from_nalgebra_and_columns() {
        let m = Mat3::new_translation(&Vec2::new(1.0, 2.0));
        assert_eq!(UniformInput::from(m).into_mat3("m").unwrap(), m);

        let columns = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 2.0, 1.0]];
        assert_eq!(UniformInput::from(columns).into_mat3("m").unwrap(), m);

        let list = UniformInput::from(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![1.0, 2.0, 1.0]]);
        assert_eq!(list.into_mat3("m").unwrap(), m);
    }

    #[test]
    fn test_matrix_size_mismatch() {
        let err = UniformInput::from(Mat3::identity()).into_mat4("projection_matrix").unwrap_err();
        assert!(matches!(err, GlError::ShapeMismatch { .. }));

        let ragged = UniformInput::from(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0, 1.0]]);
        assert!(ragged.into_mat3("m").is_err());
    }

    #[test]
    fn test_matrix_data_shorter_than_dimensions() {
        let short = UniformInput::Matrix { cols: 4, rows: 4, data: vec![1.0; 3] };
        let err = short.into_mat4("transformation_projection_matrix").unwrap_err();
        assert!(matches!(err, GlError::ShapeMismatch { .. }));

        let long = UniformInput::Matrix { cols: 3, rows: 3, data: vec![0.0; 10] };
        assert!(matches!(long.into_mat3("normal_matrix"), Err(GlError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_list_length_checked() {
        let one = UniformInput::from(vec![[0.5, 1.0, 0.3]]);
        assert_eq!(one.clone().into_vec3_list("light_positions", 1).unwrap(), vec![Vec3::new(0.5, 1.0, 0.3)]);

        let err = one.into_vec3_list("light_positions", 2).unwrap_err();
        assert_eq!(
            err,
            GlError::shape("light_positions", "a list of 2 3-component vectors", "a list of 1 element")
        );
    }

    #[test]
    fn test_list_element_shape_checked() {
        let input = UniformInput::from(vec![vec![0.5, 1.0]]);
        assert!(matches!(input.into_vec3_list("light_positions", 1), Err(GlError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_color_list_widens_rgb() {
        let input = UniformInput::from(vec![UniformInput::from([1.0, 0.0, 0.0]), UniformInput::from(colors::opaque_black())]);
        let colors = input.into_color4_list("light_colors", 2).unwrap();
        assert_eq!(colors[0], Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(colors[1], Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_scalar_forms() {
        assert_eq!(UniformInput::from(80.0).into_scalar("shininess").unwrap(), 80.0);
        assert_eq!(UniformInput::from(vec![0.25]).into_scalar("alpha_mask").unwrap(), 0.25);
        assert!(UniformInput::from([1.0, 2.0]).into_scalar("shininess").is_err());
    }
}
