use chrono::NaiveDate;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DATE_FORMAT;

/// How the publish run reacts to a failing step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
	/// Continue regardless of failures (default)
	#[default]
	Lenient,
	/// Abort on the first failing step
	Strict,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
	NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| format!("'{}' is not a YYYY-MM-DD date", s))
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "finscan",
	author,
	version,
	about = "Run the Finviz Daily 3% UP screener and publish the results to git",
	styles = styles(),
	after_help = format!(
		"{title}
  {finscan}                            {run_desc}
  {finscan} {publish} {publish_args}   {publish_desc}
  {finscan} {scan}                       {scan_desc}
  {finscan} {path} {path_args}      {path_desc}",
		title = "Examples:".bright_blue().bold(),
		finscan = "finscan".bright_blue(),
		run_desc = "Scan, save, commit and push".dimmed(),
		publish = "publish".yellow(),
		publish_args = "--policy strict",
		publish_desc = "Stop at the first failure".dimmed(),
		scan = "scan".yellow(),
		scan_desc = "Print today's screener report".dimmed(),
		path = "path".yellow(),
		path_args = "--date 2024-03-15",
		path_desc = "Show the results file for a date".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Defaults to `publish` with default options
	#[command(subcommand)]
	pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Run the scanner into today's results file, then commit and push it
	Publish(PublishArgs),

	/// Run the Daily 3% UP screener and print the report
	Scan {
		/// Print results as JSON instead of the text report
		#[arg(long = "json")]
		json: bool,
	},

	/// Print the results file path for today or a given date
	Path {
		/// Date as YYYY-MM-DD (default: today)
		#[arg(short = 'd', long = "date", value_parser = parse_date)]
		date: Option<NaiveDate>,
	},
}

#[derive(Args, Debug, Default)]
pub struct PublishArgs {
	/// Failure handling: lenient continues, strict aborts on first failure
	#[arg(short = 'p', long = "policy", value_enum, default_value_t = FailurePolicy::Lenient)]
	pub policy: FailurePolicy,

	/// Scanner program to run (default: FINSCAN_SCANNER, or `finscan scan`)
	#[arg(short = 's', long = "scanner", value_name = "PROGRAM")]
	pub scanner: Option<PathBuf>,

	/// Repository working tree (default: current directory)
	#[arg(short = 'r', long = "repo", value_name = "DIR")]
	pub repo: Option<PathBuf>,

	/// Commit locally but skip the push
	#[arg(long = "no-push")]
	pub no_push: bool,
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn no_arguments_means_default_publish() {
		let cli = Cli::try_parse_from(["finscan"]).unwrap();
		assert!(cli.command.is_none());
		assert!(!cli.verbose);
	}

	#[test]
	fn publish_options_parse() {
		let cli = Cli::try_parse_from([
			"finscan", "publish", "--policy", "strict", "--scanner", "/bin/scan", "--no-push",
		])
		.unwrap();
		let Some(Command::Publish(args)) = cli.command else {
			panic!("expected publish");
		};
		assert_eq!(args.policy, FailurePolicy::Strict);
		assert_eq!(args.scanner, Some(PathBuf::from("/bin/scan")));
		assert!(args.no_push);
	}

	#[test]
	fn path_rejects_malformed_date() {
		assert!(Cli::try_parse_from(["finscan", "path", "--date", "15/03/2024"]).is_err());
		assert!(Cli::try_parse_from(["finscan", "path", "--date", "2024-03-15"]).is_ok());
	}
}
