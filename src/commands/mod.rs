//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod path;
pub mod publish;
pub mod scan;
