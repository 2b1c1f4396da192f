//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use csom_core::OrderStatus;

/// Format a decimal amount as a dollar value with two decimal places.
///
/// Usage in templates: `{{ order.total_amount|money }}`
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(&value.to_string()))
}

/// CSS badge class for an order status string.
///
/// Unknown statuses get a neutral badge; the value itself is rendered
/// verbatim elsewhere.
///
/// Usage in templates: `{{ order.status|status_badge }}`
#[askama::filter_fn]
pub fn status_badge(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(OrderStatus::parse(&value.to_string())
        .badge_class()
        .to_string())
}

/// Render a decimal string as "$X.YY".
fn format_money(value: &str) -> String {
    value.parse::<rust_decimal::Decimal>().map_or_else(
        |_| format!("${value}"),
        |amount| format!("${amount:.2}"),
    )
}
