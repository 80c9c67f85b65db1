//! Screener table extraction

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use super::ScreenerError;

/// Cells per row: row number followed by the ten stock columns.
const MIN_CELLS: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stock {
	pub ticker: String,
	pub company: String,
	pub sector: String,
	pub industry: String,
	pub country: String,
	pub market_cap: String,
	pub pe: String,
	pub price: String,
	pub change: String,
	pub volume: String,
}

fn selector(css: &str) -> Result<Selector, ScreenerError> {
	Selector::parse(css).map_err(|_| ScreenerError::Selector(css.to_string()))
}

/// Parse result rows from a screener page.
///
/// Uses `table.screener_table`, falling back to any table with "screener"
/// in its class. A page without such a table yields no rows.
pub fn parse_results(html: &str) -> Result<Vec<Stock>, ScreenerError> {
	let document = Html::parse_document(html);

	let Some(table) = find_table(&document)? else {
		return Ok(Vec::new());
	};

	let rows = selector("tr")?;
	let cells = selector("td")?;

	// First row is the header
	Ok(table
		.select(&rows)
		.skip(1)
		.filter_map(|row| parse_row(row, &cells))
		.collect())
}

fn find_table(document: &Html) -> Result<Option<ElementRef<'_>>, ScreenerError> {
	if let Some(table) = document.select(&selector("table.screener_table")?).next() {
		return Ok(Some(table));
	}

	Ok(document.select(&selector("table")?).find(|table| {
		table
			.value()
			.classes()
			.any(|class| class.to_lowercase().contains("screener"))
	}))
}

fn parse_row(row: ElementRef<'_>, cells: &Selector) -> Option<Stock> {
	let texts: Vec<String> = row.select(cells).map(cell_text).collect();
	if texts.len() < MIN_CELLS {
		return None;
	}

	let mut columns = texts.into_iter().skip(1);
	let mut next = || columns.next().unwrap_or_default();

	Some(Stock {
		ticker: next(),
		company: next(),
		sector: next(),
		industry: next(),
		country: next(),
		market_cap: next(),
		pe: next(),
		price: next(),
		change: next(),
		volume: next(),
	})
}

/// Text of every descendant node, each trimmed, concatenated.
fn cell_text(cell: ElementRef<'_>) -> String {
	cell.text().map(str::trim).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(no: u32, ticker: &str) -> String {
		format!(
			"<tr><td>{no}</td><td><a href=\"quote.ashx?t={ticker}\"> {ticker} </a></td>\
			 <td>{ticker} Inc.</td><td>Technology</td><td>Software</td><td>USA</td>\
			 <td>12.5B</td><td>31.2</td><td>145.10</td><td><span>4.21%</span></td><td>3,120,554</td></tr>"
		)
	}

	fn page(table_class: &str, rows: &[String]) -> String {
		format!(
			"<html><body><table class=\"{}\"><tr><th>No.</th><th>Ticker</th></tr>{}</table></body></html>",
			table_class,
			rows.join("")
		)
	}

	#[test]
	fn extracts_rows_after_header() {
		let html = page("screener_table", &[row(1, "NVDA"), row(2, "AMD")]);
		let stocks = parse_results(&html).unwrap();

		assert_eq!(stocks.len(), 2);
		assert_eq!(stocks[0].ticker, "NVDA");
		assert_eq!(stocks[0].company, "NVDA Inc.");
		assert_eq!(stocks[0].change, "4.21%");
		assert_eq!(stocks[0].volume, "3,120,554");
		assert_eq!(stocks[1].ticker, "AMD");
	}

	#[test]
	fn skips_first_row_even_when_it_has_cells() {
		let html = format!(
			"<table class=\"screener_table\">{}{}</table>",
			row(0, "HEAD"),
			row(1, "MSFT")
		);
		let stocks = parse_results(&html).unwrap();
		assert_eq!(stocks.len(), 1);
		assert_eq!(stocks[0].ticker, "MSFT");
	}

	#[test]
	fn falls_back_to_screener_like_class() {
		let html = page("styled-table-new Screener-Body", &[row(1, "TSLA")]);
		let stocks = parse_results(&html).unwrap();
		assert_eq!(stocks.len(), 1);
		assert_eq!(stocks[0].ticker, "TSLA");
	}

	#[test]
	fn ignores_short_rows() {
		let short = "<tr><td>1</td><td>X</td></tr>".to_string();
		let html = page("screener_table", &[short, row(2, "META")]);
		let stocks = parse_results(&html).unwrap();
		assert_eq!(stocks.len(), 1);
		assert_eq!(stocks[0].ticker, "META");
	}

	#[test]
	fn page_without_table_has_no_results() {
		let html = "<html><body><table class=\"other\"><tr><td>1</td></tr></table></body></html>";
		assert!(parse_results(html).unwrap().is_empty());
	}
}
