//! Uniform demo application
//!
//! Drives the shader proxies against a headless context and logs what the
//! backend received. Pass a `.toml` or `.ron` application config as the
//! first argument to override the defaults.

use gl_bindings::foundation::logging;
use gl_bindings::foundation::math::{rotation2d, translation2d, translation3d};
use gl_bindings::gl::UniformValue;
use gl_bindings::prelude::*;

fn load_config() -> Result<ApplicationConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(ApplicationConfig::load_from_file(&path)?),
        None => Ok(ApplicationConfig::default()),
    }
}

fn run(config: &ApplicationConfig) -> Result<(), Box<dyn std::error::Error>> {
    let _context = Context::headless(config.context.clone())?.make_current()?;

    let mut phong = Phong::new(config.phong.flags, config.phong.light_count)?;
    let light_count = phong.light_count() as usize;
    phong
        .set_diffuse_color((0.5, 1.0, 0.9))?
        .set_shininess(config.phong.shininess)?
        .set_transformation_matrix(translation3d(Vec3::new(0.0, 1.0, 0.0)))?
        .set_projection_matrix(Mat4::zeros())?
        .set_light_positions(vec![Vec3::new(0.5, 1.0, 0.3); light_count])?
        .set_light_colors(vec![colors::opaque_black(); light_count])?;
    log::info!("Phong shader ready: {:?}, {} light(s)", phong.flags(), phong.light_count());

    // Deliberately wrong: one light position too few
    if let Err(err) = phong.set_light_positions(vec![Vec3::zeros(); light_count.saturating_sub(1)]) {
        log::info!("Rejected as expected: {}", err);
    }

    let mut vertex_color = VertexColor2D::new()?;
    vertex_color.set_transformation_projection_matrix(
        translation2d(Vec2::new(0.5, -0.5)) * rotation2d(Deg(35.0)),
    )?;

    let mut flat = Flat3D::new(FlatFlags::ALPHA_MASK)?;
    flat.set_color((1.0, 0.5, 0.0))?.set_alpha_mask(0.25)?;

    DefaultFramebuffer::set_clear_color((0.1, 0.1, 0.1))?;
    DefaultFramebuffer::clear(FramebufferClear::COLOR | FramebufferClear::DEPTH)?;

    Context::with_current(|context| {
        if let Some(backend) = context.headless_backend() {
            log::info!(
                "Backend holds {} program(s), {} uniform byte(s) uploaded, {} clear(s)",
                backend.program_count(),
                backend.uploaded_bytes(),
                backend.clears().len()
            );
            if let Some(UniformValue::Mat3(matrix)) = backend.uniform(vertex_color.program_id(), 0) {
                log::debug!("VertexColor2D transformation: {}", matrix);
            }
        }
        Ok(())
    })?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_filter(&config.log_filter);

    log::info!("Starting {}", config.name);
    run(&config)?;
    log::info!("{} finished", config.name);
    Ok(())
}
