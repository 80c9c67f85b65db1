//! External process execution

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::core::StepStatus;
use crate::ui;

/// A program invocation: executable, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
	pub program: PathBuf,
	pub args: Vec<String>,
	pub workdir: Option<PathBuf>,
}

impl CommandSpec {
	pub fn new(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
			args: Vec::new(),
			workdir: None,
		}
	}

	pub fn arg(mut self, arg: impl Into<String>) -> Self {
		self.args.push(arg.into());
		self
	}

	pub fn current_dir(mut self, dir: &Path) -> Self {
		self.workdir = Some(dir.to_path_buf());
		self
	}

	/// Shell-like rendering for log output
	pub fn display(&self) -> String {
		let mut parts = vec![self.program.display().to_string()];
		for arg in &self.args {
			if arg.contains(char::is_whitespace) {
				parts.push(format!("\"{}\"", arg));
			} else {
				parts.push(arg.clone());
			}
		}
		parts.join(" ")
	}

	fn to_command(&self) -> Command {
		let mut command = Command::new(&self.program);
		command.args(&self.args);
		if let Some(dir) = &self.workdir {
			command.current_dir(dir);
		}
		command
	}
}

/// Runs external programs and reports how they ended.
pub trait ProcessRunner {
	/// Runs with inherited stdio and waits for exit.
	fn run(&self, command: &CommandSpec) -> StepStatus;

	/// Runs with stdout redirected into `stdout`; stderr stays on the console.
	fn run_redirected(&self, command: &CommandSpec, stdout: File) -> StepStatus;
}

/// Spawns real processes via `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
	fn run(&self, command: &CommandSpec) -> StepStatus {
		ui::debug(&format!("Running: {}", command.display()));
		to_status(command, command.to_command().status())
	}

	fn run_redirected(&self, command: &CommandSpec, stdout: File) -> StepStatus {
		ui::debug(&format!("Running: {} > file", command.display()));
		let mut process = command.to_command();
		process.stdout(Stdio::from(stdout));
		to_status(command, process.status())
	}
}

fn to_status(command: &CommandSpec, result: io::Result<ExitStatus>) -> StepStatus {
	match result {
		Ok(status) if status.success() => StepStatus::Success,
		Ok(status) => StepStatus::Failed { code: status.code() },
		Err(e) => {
			ui::error(&format!("{}: {}", command.program.display(), e));
			StepStatus::Unavailable { reason: e.to_string() }
		}
	}
}

#[cfg(all(test, unix))]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	fn sh(script: &str) -> CommandSpec {
		CommandSpec::new("sh").arg("-c").arg(script)
	}

	#[test]
	fn redirected_stdout_is_written_verbatim() {
		let dir = TempDir::new().unwrap();
		let out = dir.path().join("out.txt");
		let file = File::create(&out).unwrap();

		let status = SystemRunner.run_redirected(&sh("printf 'a\\tb\\nno newline'"), file);

		assert_eq!(status, StepStatus::Success);
		assert_eq!(fs::read(&out).unwrap(), b"a\tb\nno newline");
	}

	#[test]
	fn partial_output_survives_nonzero_exit() {
		let dir = TempDir::new().unwrap();
		let out = dir.path().join("out.txt");
		let file = File::create(&out).unwrap();

		let status = SystemRunner.run_redirected(&sh("echo partial; exit 3"), file);

		assert_eq!(status, StepStatus::Failed { code: Some(3) });
		assert_eq!(fs::read_to_string(&out).unwrap(), "partial\n");
	}

	#[test]
	fn missing_program_is_unavailable() {
		let status = SystemRunner.run(&CommandSpec::new("/nonexistent/finscan-test-program"));
		assert!(matches!(status, StepStatus::Unavailable { .. }));
		assert_eq!(status.exit_code(), 127);
	}

	#[test]
	fn runs_in_requested_directory() {
		let dir = TempDir::new().unwrap();
		let status = SystemRunner.run(&sh("touch marker").current_dir(dir.path()));
		assert!(status.is_success());
		assert!(dir.path().join("marker").exists());
	}

	#[test]
	fn display_quotes_arguments_with_spaces() {
		let spec = CommandSpec::new("git").arg("add").arg("Results/3% UP/x.txt");
		assert_eq!(spec.display(), "git add \"Results/3% UP/x.txt\"");
	}
}
