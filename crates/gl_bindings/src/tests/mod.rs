//! Cross-module tests running shaders and framebuffer calls against a
//! headless context

mod shader_tests;

use crate::core::ContextConfig;
use crate::gl::{Context, CurrentContext, FramebufferClear, GlResult, ProgramId, UniformValue};
use crate::foundation::math::Color4;

/// Make a default headless context current on this test's thread
fn headless() -> CurrentContext {
    Context::headless(ContextConfig::default())
        .and_then(Context::make_current)
        .expect("headless context")
}

/// Last value uploaded to `location` of `program`
fn uniform(program: ProgramId, location: u32) -> Option<UniformValue> {
    Context::with_current(|context| {
        Ok(context
            .headless_backend()
            .and_then(|backend| backend.uniform(program, location))
            .cloned())
    })
    .expect("current context")
}

/// Clear color and clear history of the current headless context
fn framebuffer_state() -> GlResult<(Color4, Vec<FramebufferClear>)> {
    Context::with_current(|context| {
        let backend = context.headless_backend().expect("headless backend");
        Ok((backend.clear_color(), backend.clears().to_vec()))
    })
}
