//! Shared plumbing for the case-study binaries.
//!
//! Each program under `src/bin/` is self-contained; this crate only carries
//! the ambient pieces they all use: configuration, logging and console
//! headings.

pub mod config;
pub mod console;
pub mod telemetry;

pub use config::{CaseConfig, ConfigError};
pub use console::{bootstrap, heading};
