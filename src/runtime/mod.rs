//! # Process Runtime
//!
//! Spawning of the scanner and of version-control commands.

pub mod process;

pub use process::{CommandSpec, ProcessRunner, SystemRunner};
