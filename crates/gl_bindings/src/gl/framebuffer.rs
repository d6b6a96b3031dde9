//! Framebuffer clear masks and default framebuffer operations

use bitflags::bitflags;

use crate::gl::{Context, GlError, GlResult};
use crate::shaders::uniform::UniformInput;

bitflags! {
    /// Buffers to clear, using the GL `*_BUFFER_BIT` values
    ///
    /// Complement (`!`) is taken within the three declared buffers, so
    /// `FramebufferClear::COLOR & !FramebufferClear::COLOR` is empty.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FramebufferClear: u32 {
        /// `GL_COLOR_BUFFER_BIT`
        const COLOR = 0x0000_4000;
        /// `GL_DEPTH_BUFFER_BIT`
        const DEPTH = 0x0000_0100;
        /// `GL_STENCIL_BUFFER_BIT`
        const STENCIL = 0x0000_0400;
    }
}

impl FramebufferClear {
    /// Interpret a raw GL bitfield, rejecting undeclared bits
    pub fn try_from_raw(bits: u32) -> GlResult<Self> {
        Self::from_bits(bits).ok_or_else(|| {
            GlError::InvalidArgument(format!("0x{bits:x} contains bits outside of FramebufferClear"))
        })
    }
}

/// The window-system provided framebuffer of the current context
pub struct DefaultFramebuffer;

impl DefaultFramebuffer {
    /// Clear the given buffers
    pub fn clear(mask: FramebufferClear) -> GlResult<()> {
        Context::with_current(|context| {
            context.backend_mut().clear(mask);
            Ok(())
        })
    }

    /// Set the color used by subsequent color clears
    ///
    /// Accepts RGB (alpha set to 1) or RGBA values.
    pub fn set_clear_color(color: impl Into<UniformInput>) -> GlResult<()> {
        let color = color.into().into_color4("clear_color")?;
        Context::with_current(|context| {
            context.backend_mut().set_clear_color(color);
            Ok(())
        })
    }
}
