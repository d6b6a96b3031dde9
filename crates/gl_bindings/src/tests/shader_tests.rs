//! Integration tests for the shader uniform proxies
//!
//! Checks flag/light configuration, uploaded defaults and the shape checks
//! of every setter by reading uniforms back from the headless backend.

use super::{headless, uniform};
use crate::core::ContextConfig;
use crate::foundation::math::{colors, rotation2d, translation2d, translation3d, Deg, Mat3, Mat4, Vec2, Vec3};
use crate::gl::{Context, GlError, UniformValue};
use crate::shaders::phong::{
    ALPHA_MASK_LOCATION, AMBIENT_COLOR_LOCATION, DIFFUSE_COLOR_LOCATION, LIGHT_POSITIONS_LOCATION,
    NORMAL_MATRIX_LOCATION, SHININESS_LOCATION, TRANSFORMATION_MATRIX_LOCATION,
};
use crate::shaders::{Flat2D, Flat3D, FlatFlags, Phong, PhongFlags, UniformInput, VertexColor2D, VertexColor3D};
use approx::assert_relative_eq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phong_defaults() {
        let _context = headless();
        let phong = Phong::create().unwrap();

        assert_eq!(phong.flags(), PhongFlags::NONE);
        assert_eq!(phong.light_count(), 1);
    }

    #[test]
    fn test_phong_flags_keep_default_light_count() {
        let _context = headless();
        let phong = Phong::with_flags(PhongFlags::DIFFUSE_TEXTURE | PhongFlags::ALPHA_MASK).unwrap();

        assert_eq!(phong.flags(), PhongFlags::DIFFUSE_TEXTURE | PhongFlags::ALPHA_MASK);
        assert_eq!(phong.light_count(), 1);
    }

    #[test]
    fn test_phong_light_count() {
        let _context = headless();
        let phong = Phong::new(PhongFlags::NONE, 3).unwrap();

        assert_eq!(phong.flags(), PhongFlags::NONE);
        assert_eq!(phong.light_count(), 3);
        assert_eq!(phong.light_colors_location(), LIGHT_POSITIONS_LOCATION + 3);
    }

    #[test]
    fn test_phong_rejects_zero_lights() {
        let _context = headless();
        assert!(matches!(Phong::new(PhongFlags::NONE, 0), Err(GlError::InvalidArgument(_))));
    }

    #[test]
    fn test_phong_rejects_lights_past_location_limit() {
        let _context = Context::headless(ContextConfig::default().with_limits(16, 16))
            .and_then(Context::make_current)
            .unwrap();

        // 10 + 2 * 3 fits exactly, one more light does not
        assert!(Phong::new(PhongFlags::NONE, 3).is_ok());
        assert!(matches!(Phong::new(PhongFlags::NONE, 4), Err(GlError::InvalidArgument(_))));
    }

    #[test]
    fn test_phong_without_context() {
        assert_eq!(Phong::create().err(), Some(GlError::ContextMissing));
    }

    #[test]
    fn test_phong_uploads_defaults() {
        let _context = headless();
        let phong = Phong::new(PhongFlags::NONE, 2).unwrap();
        let id = phong.program_id();

        assert_eq!(uniform(id, AMBIENT_COLOR_LOCATION), Some(UniformValue::Vec4(colors::opaque_black())));
        assert_eq!(uniform(id, DIFFUSE_COLOR_LOCATION), Some(UniformValue::Vec4(colors::white())));
        assert_eq!(uniform(id, SHININESS_LOCATION), Some(UniformValue::Float(80.0)));
        assert_eq!(uniform(id, NORMAL_MATRIX_LOCATION), Some(UniformValue::Mat3(Mat3::identity())));
        assert_eq!(uniform(id, ALPHA_MASK_LOCATION), None);
        assert_eq!(
            uniform(id, LIGHT_POSITIONS_LOCATION),
            Some(UniformValue::Vec3Array(vec![Vec3::zeros(); 2]))
        );
        assert_eq!(
            uniform(id, phong.light_colors_location()),
            Some(UniformValue::Vec4Array(vec![colors::white(); 2]))
        );
    }

    #[test]
    fn test_phong_ambient_texture_default() {
        let _context = headless();
        let phong = Phong::with_flags(PhongFlags::AMBIENT_TEXTURE | PhongFlags::ALPHA_MASK).unwrap();

        assert_eq!(uniform(phong.program_id(), AMBIENT_COLOR_LOCATION), Some(UniformValue::Vec4(colors::white())));
        assert_eq!(uniform(phong.program_id(), ALPHA_MASK_LOCATION), Some(UniformValue::Float(0.5)));
    }

    #[test]
    fn test_phong_uniform_setters() {
        let _context = headless();
        let mut phong = Phong::with_flags(PhongFlags::DIFFUSE_TEXTURE | PhongFlags::ALPHA_MASK).unwrap();

        phong
            .set_diffuse_color((0.5, 1.0, 0.9))
            .unwrap()
            .set_transformation_matrix(translation3d(Vec3::new(0.0, 1.0, 0.0)))
            .unwrap()
            .set_projection_matrix(Mat4::zeros())
            .unwrap()
            .set_light_positions(vec![(0.5, 1.0, 0.3)])
            .unwrap()
            .set_light_colors(vec![colors::opaque_black()])
            .unwrap()
            .set_alpha_mask(0.25)
            .unwrap();

        let id = phong.program_id();
        match uniform(id, DIFFUSE_COLOR_LOCATION) {
            Some(UniformValue::Vec4(color)) => assert_relative_eq!(color, colors::rgba(0.5, 1.0, 0.9, 1.0)),
            other => panic!("unexpected diffuse color {other:?}"),
        }
        match uniform(id, TRANSFORMATION_MATRIX_LOCATION) {
            Some(UniformValue::Mat4(matrix)) => assert_relative_eq!(matrix[(1, 3)], 1.0),
            other => panic!("unexpected transformation {other:?}"),
        }
        assert_eq!(
            uniform(id, LIGHT_POSITIONS_LOCATION),
            Some(UniformValue::Vec3Array(vec![Vec3::new(0.5, 1.0, 0.3)]))
        );
        assert_eq!(uniform(id, ALPHA_MASK_LOCATION), Some(UniformValue::Float(0.25)));
    }

    #[test]
    fn test_light_positions_length_must_match() {
        let _context = headless();
        let mut phong = Phong::new(PhongFlags::NONE, 3).unwrap();

        let three = vec![[0.0, 1.0, 2.0], [1.0, 1.0, 1.0], [-1.0, 0.0, 4.0]];
        assert!(phong.set_light_positions(three).is_ok());

        let two = vec![[0.0, 1.0, 2.0], [1.0, 1.0, 1.0]];
        assert!(matches!(phong.set_light_positions(two), Err(GlError::ShapeMismatch { .. })));

        let wrong_width = vec![[0.0, 1.0], [1.0, 1.0], [2.0, 2.0]];
        assert!(matches!(phong.set_light_positions(wrong_width), Err(GlError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_phong_shape_mismatches() {
        let _context = headless();
        let mut phong = Phong::create().unwrap();

        assert!(matches!(phong.set_ambient_color([1.0, 0.0]), Err(GlError::ShapeMismatch { .. })));
        assert!(matches!(phong.set_shininess([1.0, 2.0]), Err(GlError::ShapeMismatch { .. })));
        assert!(matches!(phong.set_normal_matrix(Mat4::identity()), Err(GlError::ShapeMismatch { .. })));
        assert!(matches!(phong.set_transformation_matrix(Mat3::identity()), Err(GlError::ShapeMismatch { .. })));
        assert!(phong.set_specular_color((1.0, 1.0, 1.0, 0.5)).is_ok());
    }

    #[test]
    fn test_alpha_mask_needs_flag() {
        let _context = headless();
        let mut phong = Phong::create().unwrap();

        assert!(matches!(phong.set_alpha_mask(0.5), Err(GlError::MissingFlag { .. })));
    }

    #[test]
    fn test_setter_after_context_released() {
        let context = headless();
        let mut phong = Phong::create().unwrap();
        drop(context);

        assert_eq!(phong.set_shininess(10.0).err(), Some(GlError::ContextMissing));
    }

    #[test]
    fn test_shader_from_dropped_context_rejected() {
        let first = headless();
        let mut stale = Phong::create().unwrap();
        drop(first);

        let _second = headless();
        let fresh = Phong::new(PhongFlags::NONE, 2).unwrap();

        assert_eq!(stale.set_shininess(3.0).err(), Some(GlError::InvalidProgram));
        assert_eq!(uniform(fresh.program_id(), SHININESS_LOCATION), Some(UniformValue::Float(80.0)));
    }

    #[test]
    fn test_short_matrix_data_rejected_by_shader() {
        let _context = headless();
        let mut shader = VertexColor3D::new().unwrap();

        let short = UniformInput::Matrix { cols: 4, rows: 4, data: vec![1.0; 3] };
        let result = shader.set_transformation_projection_matrix(short);
        assert!(matches!(result, Err(GlError::ShapeMismatch { .. })));
        assert_eq!(uniform(shader.program_id(), 0), Some(UniformValue::Mat4(Mat4::identity())));
    }

    #[test]
    fn test_vertex_color_2d_matrix() {
        let _context = headless();
        let mut shader = VertexColor2D::new().unwrap();
        let matrix = translation2d(Vec2::new(1.0, -1.0)) * rotation2d(Deg(35.0));

        shader.set_transformation_projection_matrix(matrix).unwrap();
        assert_eq!(uniform(shader.program_id(), 0), Some(UniformValue::Mat3(matrix)));

        let wrong = shader.set_transformation_projection_matrix(Mat4::identity());
        assert!(matches!(wrong, Err(GlError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_vertex_color_3d_matrix() {
        let _context = headless();
        let mut shader = VertexColor3D::new().unwrap();

        assert_eq!(uniform(shader.program_id(), 0), Some(UniformValue::Mat4(Mat4::identity())));
        assert!(shader.set_transformation_projection_matrix(Mat4::zeros()).is_ok());

        let wrong = shader.set_transformation_projection_matrix(Mat3::identity());
        assert!(matches!(wrong, Err(GlError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_matrix_from_nested_columns() {
        let _context = headless();
        let mut shader = VertexColor2D::new().unwrap();

        let columns = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [2.0, 3.0, 1.0]];
        shader.set_transformation_projection_matrix(columns).unwrap();
        assert_eq!(
            uniform(shader.program_id(), 0),
            Some(UniformValue::Mat3(translation2d(Vec2::new(2.0, 3.0))))
        );
    }

    #[test]
    fn test_flat_shader() {
        let _context = headless();
        let mut plain = Flat3D::new(FlatFlags::NONE).unwrap();
        let mut masked = Flat2D::new(FlatFlags::TEXTURED | FlatFlags::ALPHA_MASK).unwrap();

        assert_eq!(uniform(plain.program_id(), 1), Some(UniformValue::Vec4(colors::white())));
        assert_eq!(uniform(masked.program_id(), 2), Some(UniformValue::Float(0.5)));

        plain.set_color((1.0, 0.0, 0.0)).unwrap();
        assert_eq!(uniform(plain.program_id(), 1), Some(UniformValue::Vec4(colors::rgba(1.0, 0.0, 0.0, 1.0))));

        assert!(matches!(plain.set_alpha_mask(0.1), Err(GlError::MissingFlag { .. })));
        assert!(masked.set_alpha_mask(0.1).is_ok());
        assert!(masked.set_transformation_projection_matrix(Mat3::identity()).is_ok());
        assert_eq!(masked.flags(), FlatFlags::TEXTURED | FlatFlags::ALPHA_MASK);
    }
}
