//! Grid integrity validation.
//!
//! The widget's rendering contract: a cell with a parseable `day_Click`
//! handler is selectable (today or future) and must not carry the invalid
//! class token; a cell without one is past or padding and must carry exactly
//! the invalid token and no handler at all. Classification and expectation
//! both come from the handler, so the decoded date's chronology is not
//! re-checked here.

use page_bridge::FramePath;
use tracing::{info, warn};

use crate::adapter::CalendarAdapter;
use crate::errors::{map_bridge_error, CalendarError};
use crate::parse::parse_day_click;
use crate::selectors;
use crate::types::{Mismatch, ValidationReport, INVALID_DAY_CLASS};

pub(crate) async fn validate_grid(
    adapter: &CalendarAdapter,
    frame: &FramePath,
) -> Result<ValidationReport, CalendarError> {
    let cells = adapter
        .bridge()
        .query(frame, selectors::GRID_CELLS)
        .await
        .map_err(map_bridge_error)?;

    let mut report = ValidationReport::default();
    let mut checked = 0usize;

    for cell in &cells {
        let text = cell.text.trim();
        if text.is_empty() {
            // padding cell
            continue;
        }
        checked += 1;

        let handler = cell.attribute("onclick");
        match handler.and_then(parse_day_click) {
            Some(date) => {
                let class = cell.class_attr().unwrap_or_default();
                if class
                    .split_whitespace()
                    .any(|token| token == INVALID_DAY_CLASS)
                {
                    warn!(cell = text, %date, class, "selectable cell carries the invalid class token");
                    report.push(Mismatch::FutureCellClass {
                        date,
                        text: text.to_string(),
                        class: class.to_string(),
                    });
                }
            }
            None => {
                let class = cell.class_attr();
                if class != Some(INVALID_DAY_CLASS) {
                    warn!(cell = text, ?class, "past cell does not carry exactly the invalid class token");
                    report.push(Mismatch::PastCellClass {
                        text: text.to_string(),
                        class: class.map(str::to_string),
                    });
                }
                if let Some(handler) = handler {
                    warn!(cell = text, handler, "past cell carries an onclick handler");
                    report.push(Mismatch::PastCellHasHandler {
                        text: text.to_string(),
                        handler: handler.to_string(),
                    });
                }
            }
        }
    }

    if report.is_clean() {
        info!(cells = checked, "calendar grid conforms to the past/future rule");
    } else {
        warn!(
            cells = checked,
            mismatches = report.len(),
            "calendar grid violates the past/future rule"
        );
    }
    Ok(report)
}
