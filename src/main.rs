//! finscan - daily Finviz screener results, published to git
//!
//! With no arguments, runs the scanner into today's results file and
//! commits and pushes it from the current repository.

use anyhow::Result;
use clap::Parser;

use finscan::cli::{Cli, Command};
use finscan::commands;
use finscan::ui::Log;

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	let code = match cli.command {
		None => commands::publish::run(&Default::default())?,
		Some(Command::Publish(args)) => commands::publish::run(&args)?,
		Some(Command::Scan { json }) => {
			commands::scan::run(json)?;
			0
		}
		Some(Command::Path { date }) => {
			commands::path::run(date)?;
			0
		}
	};

	std::process::exit(code)
}
