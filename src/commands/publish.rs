//! Publish command - scan, save, commit and push

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::PublishArgs;
use crate::config;
use crate::core::SystemClock;
use crate::processing::PublishTask;
use crate::runtime::{CommandSpec, SystemRunner};
use crate::storage::GitCli;
use crate::ui;

/// Returns the process exit code for the run.
pub fn run(args: &PublishArgs) -> Result<i32> {
	let root = args.repo.clone().unwrap_or_else(|| PathBuf::from("."));
	let scanner = scanner_command(args.scanner.as_deref())?;
	ui::debug(&format!("Scanner: {}", scanner.display()));

	let task = PublishTask::new(scanner, &root)
		.policy(args.policy)
		.push(!args.no_push);
	let vcs = GitCli::new(SystemRunner, &root);

	match task.run(&SystemClock, &SystemRunner, &vcs) {
		Ok(report) => Ok(report.exit_code()),
		Err(e) => {
			ui::error(&e.to_string());
			Ok(e.exit_code())
		}
	}
}

/// `--scanner`, then FINSCAN_SCANNER, then this binary's `scan` command.
fn scanner_command(explicit: Option<&Path>) -> Result<CommandSpec> {
	if let Some(program) = explicit {
		return Ok(CommandSpec::new(program));
	}
	if let Some(program) = config::scanner_override() {
		return Ok(CommandSpec::new(program));
	}

	let exe = std::env::current_exe().context("Failed to locate finscan executable")?;
	Ok(CommandSpec::new(exe).arg("scan"))
}
