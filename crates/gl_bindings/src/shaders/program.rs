//! Program handle shared by the shader proxies

use crate::gl::{Context, GlError, GlResult, ProgramId, UniformValue};

/// A linked program in the current context
///
/// Program ids are only unique within one context, so the handle also
/// remembers which context created it.
#[derive(Debug)]
pub struct ShaderProgram {
    id: ProgramId,
    context_id: u64,
    label: String,
}

impl ShaderProgram {
    /// Create a program in the current context
    pub(crate) fn create(label: impl Into<String>) -> GlResult<Self> {
        let label = label.into();
        let (context_id, id) = Context::with_current(|context| {
            let id = context.backend_mut().create_program(&label)?;
            Ok((context.id(), id))
        })?;
        log::debug!("Created shader '{}' in context #{}", label, context_id);
        Ok(Self { id, context_id, label })
    }

    /// Backend handle
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Id of the context the program belongs to
    pub fn context_id(&self) -> u64 {
        self.context_id
    }

    /// Debug label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Upload `value` to `location`
    ///
    /// # Errors
    /// `InvalidProgram` when the current context is not the one that
    /// created the program.
    pub(crate) fn set_uniform(&self, location: u32, value: UniformValue) -> GlResult<()> {
        Context::with_current(|context| {
            if context.id() != self.context_id {
                log::warn!(
                    "Shader '{}' belongs to context #{}, current is #{}",
                    self.label,
                    self.context_id,
                    context.id()
                );
                return Err(GlError::InvalidProgram);
            }
            context.backend_mut().set_uniform(self.id, location, value)
        })
    }
}
