//! # CLI Behavior
//!
//! `todo serve` starts the server. All other commands are thin HTTP clients:
//! they resolve the server URL (`--url`, else the configured bind address and
//! port), make exactly one request per action, and print the outcome.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap, version string
//! - `commands`: config loading, logging, per-command handlers
//! - `render`: terminal formatting with `colored`

mod commands;
mod render;
pub mod setup;

pub use commands::run;
