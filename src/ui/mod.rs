//! # User Interface
//!
//! Colored terminal output with a global verbose switch.

pub mod log;

pub use log::{debug, error, info, success, Log};
