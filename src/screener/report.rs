//! Plain-text screener report

use prettytable::{format, Cell, Row, Table};
use std::fmt::Write;

use super::Stock;
use crate::core::DateStamp;

const CRITERIA: &[&str] = &[
	"Daily 3% UP",
	"Price > $30",
	"Above 200 SMA",
	"ATR 2",
	"RVOL 2",
];

const HEADERS: &[&str] = &[
	"No", "Ticker", "Company", "Sector", "Industry", "Country", "Market Cap", "P/E", "Price", "Change",
	"Volume",
];

/// Render the full report: title, criteria, URL, then the results grid
/// and ticker list (or a "No results found." line).
pub fn render(results: &[Stock], url: &str, scanner_name: &str, date: &DateStamp) -> String {
	let mut out = String::new();

	// Writing into a String cannot fail
	let _ = writeln!(out, "Finviz Screener Results - {} - {}", scanner_name, date);
	let _ = writeln!(out, "{}", "=".repeat(40));
	out.push('\n');

	out.push_str("Screening Criteria:\n");
	for criterion in CRITERIA {
		let _ = writeln!(out, "- {}", criterion);
	}
	out.push('\n');

	out.push_str("URL:\n");
	let _ = writeln!(out, "{}", url);
	let _ = writeln!(out, "{}", "-".repeat(60));
	out.push('\n');

	if results.is_empty() {
		out.push_str("No results found.\n");
		return out;
	}

	out.push_str(&results_table(results).to_string());
	out.push('\n');

	let tickers: Vec<&str> = results.iter().map(|s| s.ticker.as_str()).collect();
	out.push_str("Ticker Symbols:\n");
	let _ = writeln!(out, "{}", tickers.join(", "));

	out
}

fn results_table(results: &[Stock]) -> Table {
	let rows: Vec<[String; 11]> = results
		.iter()
		.enumerate()
		.map(|(index, stock)| {
			[
				(index + 1).to_string(),
				stock.ticker.clone(),
				stock.company.clone(),
				stock.sector.clone(),
				stock.industry.clone(),
				stock.country.clone(),
				stock.market_cap.clone(),
				stock.pe.clone(),
				stock.price.clone(),
				stock.change.clone(),
				stock.volume.clone(),
			]
		})
		.collect();

	// Columns where every value is a number are right-aligned, header included
	let specs: Vec<&str> = (0..HEADERS.len())
		.map(|column| {
			if rows.iter().all(|row| is_numeric(&row[column])) {
				"r"
			} else {
				"l"
			}
		})
		.collect();

	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_DEFAULT);
	table.set_titles(Row::new(
		HEADERS
			.iter()
			.zip(&specs)
			.map(|(header, spec)| Cell::new(header).style_spec(spec))
			.collect(),
	));

	for row in &rows {
		table.add_row(Row::new(
			row.iter()
				.zip(&specs)
				.map(|(value, spec)| Cell::new(value).style_spec(spec))
				.collect(),
		));
	}

	table
}

/// Plain or thousands-separated number, e.g. `-1.5`, `3,120,554`.
fn is_numeric(value: &str) -> bool {
	value.chars().any(|c| c.is_ascii_digit()) && value.replace(',', "").parse::<f64>().is_ok()
}
