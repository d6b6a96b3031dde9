//! Math utilities and types
//!
//! Provides the vector, matrix and color types that uniform values are built
//! from, plus a few homogeneous-transform helpers.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix3, Matrix4,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// RGB color
pub type Color3 = Vec3;

/// RGBA color
pub type Color4 = Vec4;

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Deg(pub f32);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rad(pub f32);

impl From<Deg> for Rad {
    fn from(deg: Deg) -> Self {
        Self(utils::deg_to_rad(deg.0))
    }
}

impl From<Rad> for Deg {
    fn from(rad: Rad) -> Self {
        Self(utils::rad_to_deg(rad.0))
    }
}

/// 2D homogeneous translation matrix
pub fn translation2d(offset: Vec2) -> Mat3 {
    Mat3::new_translation(&offset)
}

/// 2D homogeneous rotation matrix, counter-clockwise
pub fn rotation2d(angle: impl Into<Rad>) -> Mat3 {
    Mat3::new_rotation(angle.into().0)
}

/// 3D homogeneous translation matrix
pub fn translation3d(offset: Vec3) -> Mat4 {
    Mat4::new_translation(&offset)
}

/// Color helpers
pub mod colors {
    use super::{Color3, Color4};

    /// Build an RGB color
    pub fn rgb(r: f32, g: f32, b: f32) -> Color3 {
        Color3::new(r, g, b)
    }

    /// Build an RGBA color
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color4 {
        Color4::new(r, g, b, a)
    }

    /// Black with full alpha, the value of a default-constructed RGBA color
    pub fn opaque_black() -> Color4 {
        Color4::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Opaque white
    pub fn white() -> Color4 {
        Color4::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Widen an RGB color to RGBA with full alpha
    pub fn with_alpha(color: Color3) -> Color4 {
        Color4::new(color.x, color.y, color.z, 1.0)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_degree_radian_conversion() {
        let rad: Rad = Deg(180.0).into();
        assert_relative_eq!(rad.0, constants::PI, epsilon = EPSILON);

        let deg: Deg = Rad(constants::PI * 0.5).into();
        assert_relative_eq!(deg.0, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_translation2d_moves_points() {
        let m = translation2d(Vec2::new(1.0, 0.0));
        let p = m * Vec3::new(2.0, 3.0, 1.0);
        assert_relative_eq!(p, Vec3::new(3.0, 3.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation2d_quarter_turn() {
        let m = rotation2d(Deg(90.0));
        let p = m * Vec3::new(1.0, 0.0, 1.0);
        assert_relative_eq!(p, Vec3::new(0.0, 1.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_translation3d_moves_points() {
        let m = translation3d(Vec3::new(0.0, 0.0, -5.0));
        let p = m * Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_relative_eq!(p, Vec4::new(1.0, 2.0, -2.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_default_color_has_full_alpha() {
        assert_eq!(colors::opaque_black(), Color4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(colors::with_alpha(colors::rgb(0.5, 1.0, 0.9)), colors::rgba(0.5, 1.0, 0.9, 1.0));
    }
}
