//! # finscan Library
//!
//! Runs the Finviz "Daily 3% UP" screener, saves the report under a
//! date-stamped path and publishes it with git.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod runtime;
pub mod screener;
pub mod storage;
pub mod ui;
