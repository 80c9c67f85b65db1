//! Application configuration and constants

use std::path::PathBuf;

// === Results ===
pub const RESULTS_DIR: &str = "Results/3% UP";
pub const RESULTS_PREFIX: &str = "finviz_daily-3up_";
pub const RESULTS_EXT: &str = "txt";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const COMMIT_PREFIX: &str = "Add Finviz results for";

// === Screener ===
pub const FINVIZ_URL: &str = "https://finviz.com/screener.ashx";
pub const DEFAULT_VIEW: &str = "111";
pub const DEFAULT_ORDER: &str = "-volume";
pub const SCANNER_NAME: &str = "daily-3up";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// === External programs ===
pub const SCANNER_ENV: &str = "FINSCAN_SCANNER";
pub const GIT_ENV: &str = "FINSCAN_GIT";
pub const DEFAULT_GIT: &str = "git";

/// Scanner program override from FINSCAN_SCANNER
pub fn scanner_override() -> Option<PathBuf> {
	match std::env::var(SCANNER_ENV) {
		Ok(value) if !value.trim().is_empty() => {
			crate::ui::debug(&format!("Using {}: {}", SCANNER_ENV, value));
			Some(PathBuf::from(value))
		}
		_ => None,
	}
}

/// Git executable (FINSCAN_GIT, or `git` on PATH)
pub fn git_program() -> PathBuf {
	match std::env::var(GIT_ENV) {
		Ok(value) if !value.trim().is_empty() => {
			crate::ui::debug(&format!("Using {}: {}", GIT_ENV, value));
			PathBuf::from(value)
		}
		_ => PathBuf::from(DEFAULT_GIT),
	}
}
