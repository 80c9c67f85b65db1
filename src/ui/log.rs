//! Unified console output

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

/// Prints an error line to stderr.
pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}
