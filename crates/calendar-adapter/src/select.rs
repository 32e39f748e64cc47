//! Date selection, targeted and random.

use chrono::{Datelike, Local, NaiveDate};
use page_bridge::FramePath;
use rand::Rng;
use tracing::{info, warn};

use crate::adapter::CalendarAdapter;
use crate::errors::{map_bridge_error, CalendarError};
use crate::parse::parse_day_click;
use crate::selectors;
use crate::types::SelectedDate;

pub(crate) async fn select_date(
    adapter: &CalendarAdapter,
    frame: &FramePath,
    target: Option<NaiveDate>,
) -> Result<(), CalendarError> {
    let target = target.unwrap_or_else(|| Local::now().date_naive());
    let selector = selectors::day_cell(target.year(), target.month(), target.day());

    info!(%target, "selecting calendar date");
    adapter
        .bridge()
        .click(frame, &selector, adapter.timeouts().click)
        .await
        .map_err(map_bridge_error)?;
    info!(%target, "calendar date selected");
    Ok(())
}

pub(crate) async fn select_random_available(
    adapter: &CalendarAdapter,
    frame: &FramePath,
) -> Result<SelectedDate, CalendarError> {
    let candidates = adapter
        .bridge()
        .query(frame, selectors::SELECTABLE_CELLS)
        .await
        .map_err(map_bridge_error)?;

    if candidates.is_empty() {
        warn!(frame = %frame, "no selectable date cell in the calendar grid");
        return Err(CalendarError::NoAvailableDate);
    }

    let index = rand::thread_rng().gen_range(0..candidates.len());
    let chosen = &candidates[index];

    adapter
        .bridge()
        .click_nth(frame, selectors::SELECTABLE_CELLS, index, adapter.timeouts().click)
        .await
        .map_err(map_bridge_error)?;

    // The click already landed; a handler that fails to re-parse afterwards
    // only means the chosen date is unknown to the caller.
    match chosen.attribute("onclick").and_then(parse_day_click) {
        Some(date) => {
            info!(%date, candidates = candidates.len(), "random calendar date selected");
            Ok(SelectedDate::Known(date))
        }
        None => {
            warn!(cell = %chosen.text, "clicked cell handler did not parse, selected date unknown");
            Ok(SelectedDate::Unknown)
        }
    }
}
