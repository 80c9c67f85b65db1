//! Outcome of one external step

use std::fmt;

/// Exit code a shell reports for a program it cannot run.
const UNAVAILABLE_EXIT_CODE: i32 = 127;

/// The steps of a publish run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	Scan,
	Stage,
	Commit,
	Push,
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Step::Scan => "scan",
			Step::Stage => "stage",
			Step::Commit => "commit",
			Step::Push => "push",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
	Success,
	/// Program ran and exited non-zero. `code` is `None` when killed by a signal.
	Failed { code: Option<i32> },
	/// Program could not be started at all.
	Unavailable { reason: String },
}

impl StepStatus {
	pub fn is_success(&self) -> bool {
		matches!(self, StepStatus::Success)
	}

	pub fn exit_code(&self) -> i32 {
		match self {
			StepStatus::Success => 0,
			StepStatus::Failed { code } => code.unwrap_or(1),
			StepStatus::Unavailable { .. } => UNAVAILABLE_EXIT_CODE,
		}
	}
}

impl fmt::Display for StepStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StepStatus::Success => f.write_str("succeeded"),
			StepStatus::Failed { code: Some(code) } => write!(f, "exited with status {}", code),
			StepStatus::Failed { code: None } => f.write_str("was terminated by a signal"),
			StepStatus::Unavailable { reason } => write!(f, "could not start ({})", reason),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exit_codes_follow_shell_conventions() {
		assert_eq!(StepStatus::Success.exit_code(), 0);
		assert_eq!(StepStatus::Failed { code: Some(128) }.exit_code(), 128);
		assert_eq!(StepStatus::Failed { code: None }.exit_code(), 1);
		assert_eq!(StepStatus::Unavailable { reason: "missing".into() }.exit_code(), 127);
	}

	#[test]
	fn display_names_the_failure() {
		assert_eq!(StepStatus::Failed { code: Some(2) }.to_string(), "exited with status 2");
		assert_eq!(Step::Push.to_string(), "push");
	}
}
