//! Screener URL construction

use crate::config::{DEFAULT_ORDER, DEFAULT_VIEW, FINVIZ_URL};

/// Daily 3% UP: stocks only, price over $30, relative volume over 2,
/// ATR over 2, up 3% today, price above SMA200.
pub const DAILY_3UP_FILTERS: &[(&str, &str)] = &[
	("ind", "stocksonly"),
	("sh_price", "o30"),
	("sh_relvol", "o2"),
	("ta_averagetruerange", "o2"),
	("ta_change", "u3"),
	("ta_sma200", "pa"),
];

/// Filters are joined as `key_value` pairs in the given order.
pub fn build_url(filters: &[(&str, &str)], view: &str, order: &str) -> String {
	let filter = filters
		.iter()
		.map(|(key, value)| format!("{}_{}", key, value))
		.collect::<Vec<_>>()
		.join(",");
	format!("{}?v={}&f={}&ft=4&o={}", FINVIZ_URL, view, filter, order)
}

pub fn daily_3up_url() -> String {
	build_url(DAILY_3UP_FILTERS, DEFAULT_VIEW, DEFAULT_ORDER)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn daily_3up_url_is_stable() {
		assert_eq!(
			daily_3up_url(),
			"https://finviz.com/screener.ashx?v=111\
			 &f=ind_stocksonly,sh_price_o30,sh_relvol_o2,ta_averagetruerange_o2,ta_change_u3,ta_sma200_pa\
			 &ft=4&o=-volume"
		);
	}

	#[test]
	fn keeps_filter_order_and_custom_view() {
		let url = build_url(&[("b", "2"), ("a", "1")], "152", "ticker");
		assert_eq!(url, "https://finviz.com/screener.ashx?v=152&f=b_2,a_1&ft=4&o=ticker");
	}

	#[test]
	fn empty_filters_leave_empty_parameter() {
		assert!(build_url(&[], "111", "-volume").contains("&f=&ft=4"));
	}
}
