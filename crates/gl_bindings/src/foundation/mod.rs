//! Foundation module
//!
//! Math aliases and helpers shared by the GL and shader layers, plus
//! `env_logger` setup for binaries and tests.

pub mod logging;
pub mod math;
