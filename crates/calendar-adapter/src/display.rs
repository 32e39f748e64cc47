//! Display header reading and validation.

use chrono::{Datelike, NaiveDate};
use page_bridge::FramePath;
use tracing::{debug, info, warn};

use crate::adapter::CalendarAdapter;
use crate::errors::{map_bridge_error, CalendarError};
use crate::selectors;
use crate::types::{month_token, DisplayState, Mismatch, ValidationReport};

pub(crate) async fn read_display(
    adapter: &CalendarAdapter,
    frame: &FramePath,
) -> Result<DisplayState, CalendarError> {
    let read = adapter.timeouts().read;
    debug!(frame = %frame, "reading calendar header controls");

    let year = adapter
        .bridge()
        .input_value(frame, selectors::YEAR_INPUT, read)
        .await
        .map_err(map_bridge_error)?;
    let month_token = adapter
        .bridge()
        .input_value(frame, selectors::MONTH_INPUT, read)
        .await
        .map_err(map_bridge_error)?;

    Ok(DisplayState { year, month_token })
}

pub(crate) async fn validate_display_on(
    adapter: &CalendarAdapter,
    frame: &FramePath,
    today: NaiveDate,
) -> Result<ValidationReport, CalendarError> {
    let expected_year = today.year().to_string();
    // today.month() is 1..=12, the lookup always hits.
    let expected_month = month_token(today.month()).unwrap_or_default();

    let state = read_display(adapter, frame).await?;
    let mut report = ValidationReport::default();

    if state.year != expected_year {
        warn!(
            expected = %expected_year,
            actual = %state.year,
            "calendar year does not match system date"
        );
        report.push(Mismatch::YearMismatch {
            expected: expected_year.clone(),
            actual: state.year.clone(),
        });
    }
    if state.month_token != expected_month {
        warn!(
            expected = %expected_month,
            actual = %state.month_token,
            "calendar month does not match system date"
        );
        report.push(Mismatch::MonthMismatch {
            expected: expected_month.to_string(),
            actual: state.month_token.clone(),
        });
    }

    if report.is_clean() {
        info!(year = %state.year, month = %state.month_token, "calendar header matches system date");
    }
    Ok(report)
}
