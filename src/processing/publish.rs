//! Run the scanner into the dated results file, then stage, commit and push it

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{Clock, DateStamp, Step, StepStatus};
use crate::runtime::{CommandSpec, ProcessRunner};
use crate::storage::VersionControl;
use crate::ui;

pub use crate::cli::FailurePolicy;

#[derive(Debug, Error)]
pub enum PublishError {
	#[error("{step} step {status}")]
	StepFailed { step: Step, status: StepStatus },

	#[error("cannot create {}: {source}", .path.display())]
	OutputFile {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl PublishError {
	pub fn exit_code(&self) -> i32 {
		match self {
			PublishError::StepFailed { status, .. } => status.exit_code(),
			PublishError::OutputFile { .. } => 1,
		}
	}
}

/// What happened at each step of one run.
#[derive(Debug, Clone)]
pub struct PublishReport {
	/// Output file, relative to the repository root
	pub path: PathBuf,
	pub scan: StepStatus,
	pub stage: StepStatus,
	pub commit: StepStatus,
	/// `None` when pushing was disabled
	pub push: Option<StepStatus>,
}

impl PublishReport {
	/// Exit status of the last command that ran.
	pub fn exit_code(&self) -> i32 {
		self.push.as_ref().unwrap_or(&self.commit).exit_code()
	}
}

#[derive(Debug, Clone)]
pub struct PublishTask {
	pub scanner: CommandSpec,
	pub root: PathBuf,
	pub policy: FailurePolicy,
	pub push: bool,
}

impl PublishTask {
	pub fn new(scanner: CommandSpec, root: &Path) -> Self {
		Self {
			scanner,
			root: root.to_path_buf(),
			policy: FailurePolicy::default(),
			push: true,
		}
	}

	pub fn policy(mut self, policy: FailurePolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn push(mut self, push: bool) -> Self {
		self.push = push;
		self
	}

	pub fn run(
		&self,
		clock: &impl Clock,
		runner: &impl ProcessRunner,
		vcs: &impl VersionControl,
	) -> Result<PublishReport, PublishError> {
		let stamp = DateStamp::new(clock.today());
		let path = stamp.output_path();
		let target = self.root.join(&path);

		// The results directory must already exist.
		let scan = match File::create(&target) {
			Ok(file) => runner.run_redirected(&self.scanner, file),
			Err(source) => {
				if self.policy == FailurePolicy::Strict {
					return Err(PublishError::OutputFile { path: target, source });
				}
				ui::error(&format!("{}: {}", target.display(), source));
				StepStatus::Failed { code: Some(1) }
			}
		};
		self.check(Step::Scan, &scan)?;
		ui::success(&format!("Results saved to {}", path.display()));

		let stage = vcs.stage(&path);
		self.check(Step::Stage, &stage)?;

		let commit = vcs.commit(&stamp.commit_message());
		self.check(Step::Commit, &commit)?;

		let push = if self.push {
			let status = vcs.push();
			self.check(Step::Push, &status)?;
			ui::success("Results pushed to remote");
			Some(status)
		} else {
			ui::info("Push skipped");
			None
		};

		Ok(PublishReport {
			path,
			scan,
			stage,
			commit,
			push,
		})
	}

	fn check(&self, step: Step, status: &StepStatus) -> Result<(), PublishError> {
		if status.is_success() {
			return Ok(());
		}
		match self.policy {
			FailurePolicy::Strict => Err(PublishError::StepFailed {
				step,
				status: status.clone(),
			}),
			FailurePolicy::Lenient => {
				ui::debug(&format!("{} step {}, continuing", step, status));
				Ok(())
			}
		}
	}
}
