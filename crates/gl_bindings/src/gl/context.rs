//! GL context ownership and the per-thread current context
//!
//! Every operation that touches GPU state resolves the context that is
//! current on the calling thread. Creating the underlying driver context is
//! left to the platform layer; this module only takes ownership of a
//! backend and makes it current.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::config::{ContextConfig, GlVersion};
use crate::gl::{Attribute, AttributeKind, GlBackend, GlError, GlResult, HeadlessBackend};

thread_local! {
    static CURRENT: RefCell<Option<Context>> = const { RefCell::new(None) };
}

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A GL context: a backend plus the configuration it was created with
pub struct Context {
    id: u64,
    config: ContextConfig,
    backend: Box<dyn GlBackend>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("backend", &self.backend.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Context {
    /// Wrap a backend into a context
    ///
    /// # Errors
    /// `InvalidArgument` when the configuration is inconsistent.
    pub fn new(backend: Box<dyn GlBackend>, config: ContextConfig) -> GlResult<Self> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected context configuration: {}", err);
            return Err(err);
        }
        let id = NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed);
        log::info!(
            "Created {} context #{} ({:?}, flags {:?})",
            backend.name(),
            id,
            config.version,
            config.flags
        );
        Ok(Self { id, config, backend })
    }

    /// Create a context over a [`HeadlessBackend`] using the configured limits
    pub fn headless(config: ContextConfig) -> GlResult<Self> {
        let backend = HeadlessBackend::new(config.max_vertex_attributes, config.max_uniform_locations);
        Self::new(Box::new(backend), config)
    }

    /// Unique id of this context within the process
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Configuration the context was created with
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Requested API version
    pub fn version(&self) -> GlVersion {
        self.config.version
    }

    /// The backend owning the GPU state
    pub fn backend(&self) -> &dyn GlBackend {
        self.backend.as_ref()
    }

    /// Mutable access to the backend
    pub fn backend_mut(&mut self) -> &mut dyn GlBackend {
        self.backend.as_mut()
    }

    /// The backend as a [`HeadlessBackend`], if it is one
    pub fn headless_backend(&self) -> Option<&HeadlessBackend> {
        self.backend.as_any().downcast_ref::<HeadlessBackend>()
    }

    /// Check that `attribute` can be bound in this context
    ///
    /// The location must be below `GL_MAX_VERTEX_ATTRIBS`, and double
    /// precision attributes need desktop GL 4.1.
    pub fn check_attribute(&self, attribute: &Attribute) -> GlResult<()> {
        let max = self.backend.max_vertex_attributes();
        if attribute.location() >= max {
            return Err(GlError::InvalidArgument(format!(
                "attribute location {} is not below GL_MAX_VERTEX_ATTRIBS ({})",
                attribute.location(),
                max
            )));
        }
        if attribute.kind() == AttributeKind::Long
            && (self.config.version.is_es() || self.config.version.numbers() < (4, 1))
        {
            return Err(GlError::InvalidArgument(format!(
                "double precision attributes are not available in {:?}",
                self.config.version
            )));
        }
        Ok(())
    }

    /// Make this context current on the calling thread
    ///
    /// A previously current context is dropped. The returned guard releases
    /// the context again when it goes out of scope.
    pub fn make_current(self) -> GlResult<CurrentContext> {
        let id = self.id;
        CURRENT
            .try_with(|current| {
                let mut slot = current.try_borrow_mut().map_err(|_| GlError::ContextBusy)?;
                if let Some(previous) = slot.replace(self) {
                    log::warn!("Context #{} replaced context #{} as current", id, previous.id);
                } else {
                    log::debug!("Context #{} made current", id);
                }
                Ok(())
            })
            .map_err(|_| GlError::ContextMissing)??;
        Ok(CurrentContext { id })
    }

    /// Whether a context is current on the calling thread
    pub fn has_current() -> bool {
        CURRENT
            .try_with(|current| current.try_borrow().map_or(true, |slot| slot.is_some()))
            .unwrap_or(false)
    }

    /// Detach and return the current context
    pub fn release_current() -> Option<Self> {
        CURRENT
            .try_with(|current| current.try_borrow_mut().ok().and_then(|mut slot| slot.take()))
            .ok()
            .flatten()
    }

    /// Run `f` against the current context
    ///
    /// # Errors
    /// `ContextMissing` when no context is current, `ContextBusy` when
    /// called from inside another `with_current` closure, otherwise whatever
    /// `f` returns.
    pub fn with_current<R>(f: impl FnOnce(&mut Context) -> GlResult<R>) -> GlResult<R> {
        CURRENT
            .try_with(|current| {
                let mut slot = current.try_borrow_mut().map_err(|_| GlError::ContextBusy)?;
                let context = slot.as_mut().ok_or(GlError::ContextMissing)?;
                f(context)
            })
            .map_err(|_| GlError::ContextMissing)?
    }
}

/// Guard for a context made current with [`Context::make_current`]
///
/// Dropping the guard releases the context, unless another context has
/// been made current in the meantime.
#[derive(Debug)]
#[must_use = "dropping the guard immediately releases the context"]
pub struct CurrentContext {
    id: u64,
}

impl CurrentContext {
    /// Id of the guarded context
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for CurrentContext {
    fn drop(&mut self) {
        let _ = CURRENT.try_with(|current| {
            if let Ok(mut slot) = current.try_borrow_mut() {
                if slot.as_ref().is_some_and(|context| context.id == self.id) {
                    *slot = None;
                    log::debug!("Context #{} released", self.id);
                }
            } else {
                log::warn!("Context #{} guard dropped while the context is in use, it stays current", self.id);
            }
        });
    }
}
