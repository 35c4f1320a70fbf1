//! CLI command handlers
//!
//! Each subcommand is implemented in its own module.

pub mod list;
pub mod replay;
pub mod serve;
pub mod submit;
