//! Backend abstraction for the native GL driver
//!
//! The bindings never talk to a driver directly. Everything that mutates
//! GPU state goes through [`GlBackend`], which a driver loader implements.
//! [`HeadlessBackend`] keeps that state in memory so the binding layer can
//! run without a window or GPU.

use std::any::Any;
use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::Color4;
use crate::gl::{FramebufferClear, GlError, GlResult, UniformValue};

new_key_type! {
    /// Handle to a linked shader program
    pub struct ProgramId;
}

/// Main GL backend trait
///
/// Implementations own the real (or emulated) GPU state of one context.
pub trait GlBackend {
    /// Human readable backend name
    fn name(&self) -> &str;

    /// `GL_MAX_VERTEX_ATTRIBS`
    fn max_vertex_attributes(&self) -> u32;

    /// `GL_MAX_UNIFORM_LOCATIONS`
    fn max_uniform_locations(&self) -> u32;

    /// Create and link a program
    fn create_program(&mut self, label: &str) -> GlResult<ProgramId>;

    /// Whether `program` is alive in this backend
    fn has_program(&self, program: ProgramId) -> bool;

    /// Upload a uniform value to `location` of `program`
    fn set_uniform(&mut self, program: ProgramId, location: u32, value: UniformValue) -> GlResult<()>;

    /// `glClearColor`
    fn set_clear_color(&mut self, color: Color4);

    /// `glClear`
    fn clear(&mut self, mask: FramebufferClear);

    /// Downcast to the concrete backend type
    fn as_any(&self) -> &dyn Any;
}

/// State of one program in the headless backend
#[derive(Debug, Clone, Default)]
pub struct ProgramState {
    /// Debug label given at creation
    pub label: String,
    /// Last value uploaded to each base location
    pub uniforms: HashMap<u32, UniformValue>,
}

/// In-memory backend that records every state change
#[derive(Debug)]
pub struct HeadlessBackend {
    max_vertex_attributes: u32,
    max_uniform_locations: u32,
    programs: SlotMap<ProgramId, ProgramState>,
    clear_color: Color4,
    clears: Vec<FramebufferClear>,
    uploaded_bytes: usize,
}

impl HeadlessBackend {
    /// Create a headless backend reporting the given limits
    pub fn new(max_vertex_attributes: u32, max_uniform_locations: u32) -> Self {
        Self {
            max_vertex_attributes,
            max_uniform_locations,
            programs: SlotMap::with_key(),
            clear_color: Color4::zeros(),
            clears: Vec::new(),
            uploaded_bytes: 0,
        }
    }

    /// Last value uploaded to `location` of `program`
    pub fn uniform(&self, program: ProgramId, location: u32) -> Option<&UniformValue> {
        self.programs.get(program)?.uniforms.get(&location)
    }

    /// Recorded state of `program`
    pub fn program(&self, program: ProgramId) -> Option<&ProgramState> {
        self.programs.get(program)
    }

    /// Number of live programs
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Current clear color
    pub fn clear_color(&self) -> Color4 {
        self.clear_color
    }

    /// Every clear mask in submission order
    pub fn clears(&self) -> &[FramebufferClear] {
        &self.clears
    }

    /// Total uniform payload uploaded so far
    pub fn uploaded_bytes(&self) -> usize {
        self.uploaded_bytes
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new(
            crate::core::config::DEFAULT_MAX_VERTEX_ATTRIBUTES,
            crate::core::config::DEFAULT_MAX_UNIFORM_LOCATIONS,
        )
    }
}

impl GlBackend for HeadlessBackend {
    fn name(&self) -> &str {
        "headless"
    }

    fn max_vertex_attributes(&self) -> u32 {
        self.max_vertex_attributes
    }

    fn max_uniform_locations(&self) -> u32 {
        self.max_uniform_locations
    }

    fn create_program(&mut self, label: &str) -> GlResult<ProgramId> {
        let id = self.programs.insert(ProgramState {
            label: label.to_string(),
            uniforms: HashMap::new(),
        });
        log::debug!("Created headless program '{}' ({:?})", label, id);
        Ok(id)
    }

    fn has_program(&self, program: ProgramId) -> bool {
        self.programs.contains_key(program)
    }

    fn set_uniform(&mut self, program: ProgramId, location: u32, value: UniformValue) -> GlResult<()> {
        let end = location as usize + value.location_count();
        if end > self.max_uniform_locations as usize {
            return Err(GlError::InvalidArgument(format!(
                "uniform locations {}..{} exceed the limit of {}",
                location, end, self.max_uniform_locations
            )));
        }
        let state = self.programs.get_mut(program).ok_or(GlError::InvalidProgram)?;

        self.uploaded_bytes += value.to_bytes().len();
        log::trace!("{}: location {} <- {}", state.label, location, value.glsl_type());
        state.uniforms.insert(location, value);
        Ok(())
    }

    fn set_clear_color(&mut self, color: Color4) {
        self.clear_color = color;
    }

    fn clear(&mut self, mask: FramebufferClear) {
        self.clears.push(mask);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
