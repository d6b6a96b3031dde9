//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from the `RUST_LOG` environment variable
///
/// Returns `false` when a logger was already installed.
pub fn init() -> bool {
    env_logger::try_init().is_ok()
}

/// Initialize the logging system with an explicit filter such as `"gl_bindings=debug"`
///
/// Returns `false` when a logger was already installed.
pub fn init_with_filter(filter: &str) -> bool {
    env_logger::Builder::new()
        .parse_filters(filter)
        .try_init()
        .is_ok()
}
