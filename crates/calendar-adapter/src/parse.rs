//! Handler-string parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::HandlerDate;

static DAY_CLICK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"day_Click\((\d+),\s*(\d+),\s*(\d+)\)").unwrap());

/// Recover the `(year, month, day)` a `day_Click` handler string encodes.
///
/// The widget stamps selectable cells with inline handlers of the form
/// `day_Click(2025,11,25)`, literal integers with optional whitespace after
/// the commas. Returns `None` when the string does not match; callers treat
/// that the same as a missing handler.
pub fn parse_day_click(handler: &str) -> Option<HandlerDate> {
    let caps = DAY_CLICK_RE.captures(handler)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    Some(HandlerDate { year, month, day })
}
