//! Publishing results through the git command line

use std::path::{Path, PathBuf};

use crate::config;
use crate::core::StepStatus;
use crate::runtime::{CommandSpec, ProcessRunner};

/// Stage, commit and push operations on a working tree.
pub trait VersionControl {
	fn stage(&self, path: &Path) -> StepStatus;
	fn commit(&self, message: &str) -> StepStatus;
	/// Push the current branch to its configured upstream.
	fn push(&self) -> StepStatus;
}

/// `git` CLI client rooted at a working tree.
pub struct GitCli<R: ProcessRunner> {
	runner: R,
	program: PathBuf,
	workdir: PathBuf,
}

impl<R: ProcessRunner> GitCli<R> {
	pub fn new(runner: R, workdir: &Path) -> Self {
		Self::with_program(runner, workdir, config::git_program())
	}

	pub fn with_program(runner: R, workdir: &Path, program: PathBuf) -> Self {
		Self {
			runner,
			program,
			workdir: workdir.to_path_buf(),
		}
	}

	fn git(&self, args: &[&str]) -> CommandSpec {
		args.iter()
			.fold(CommandSpec::new(&self.program), |spec, arg| spec.arg(*arg))
			.current_dir(&self.workdir)
	}
}

impl<R: ProcessRunner> VersionControl for GitCli<R> {
	fn stage(&self, path: &Path) -> StepStatus {
		let path = path.to_string_lossy();
		self.runner.run(&self.git(&["add", "--", &path]))
	}

	fn commit(&self, message: &str) -> StepStatus {
		self.runner.run(&self.git(&["commit", "-m", message]))
	}

	fn push(&self) -> StepStatus {
		self.runner.run(&self.git(&["push"]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::fs::File;

	#[derive(Default)]
	struct RecordingRunner {
		calls: RefCell<Vec<CommandSpec>>,
	}

	impl ProcessRunner for &RecordingRunner {
		fn run(&self, command: &CommandSpec) -> StepStatus {
			self.calls.borrow_mut().push(command.clone());
			StepStatus::Success
		}

		fn run_redirected(&self, command: &CommandSpec, _stdout: File) -> StepStatus {
			self.run(command)
		}
	}

	fn args(spec: &CommandSpec) -> Vec<&str> {
		spec.args.iter().map(String::as_str).collect()
	}

	#[test]
	fn issues_add_commit_push_in_workdir() {
		let runner = RecordingRunner::default();
		let repo = Path::new("/tmp/repo");
		let git = GitCli::with_program(&runner, repo, PathBuf::from("git"));

		git.stage(Path::new("Results/3% UP/finviz_daily-3up_2024-03-15.txt"));
		git.commit("Add Finviz results for 2024-03-15");
		git.push();

		let calls = runner.calls.borrow();
		assert_eq!(calls.len(), 3);
		assert_eq!(args(&calls[0]), ["add", "--", "Results/3% UP/finviz_daily-3up_2024-03-15.txt"]);
		assert_eq!(args(&calls[1]), ["commit", "-m", "Add Finviz results for 2024-03-15"]);
		assert_eq!(args(&calls[2]), ["push"]);
		assert!(calls.iter().all(|c| c.program == Path::new("git")));
		assert!(calls.iter().all(|c| c.workdir.as_deref() == Some(repo)));
	}
}
