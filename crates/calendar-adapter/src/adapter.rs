//! Public adapter surface.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use page_bridge::{FramePath, PageBridge};

use crate::errors::CalendarError;
use crate::types::{CalendarTimeouts, DisplayState, SelectedDate, ValidationReport};
use crate::{display, grid, select};

/// Stateless adapter around the rendered calendar widget.
///
/// The widget handle (a frame path) is borrowed per call from the hosting
/// page session; the adapter itself only owns its bridge and timeouts, so
/// one instance can serve any number of widgets and repeated calls without
/// widget mutation yield identical results.
pub struct CalendarAdapter {
    bridge: Arc<dyn PageBridge>,
    timeouts: CalendarTimeouts,
}

impl CalendarAdapter {
    pub fn new(bridge: Arc<dyn PageBridge>) -> Self {
        Self::with_timeouts(bridge, CalendarTimeouts::default())
    }

    pub fn with_timeouts(bridge: Arc<dyn PageBridge>, timeouts: CalendarTimeouts) -> Self {
        Self { bridge, timeouts }
    }

    pub(crate) fn bridge(&self) -> &dyn PageBridge {
        self.bridge.as_ref()
    }

    pub(crate) fn timeouts(&self) -> CalendarTimeouts {
        self.timeouts
    }

    /// Read the year and month the widget currently shows, raw.
    pub async fn read_display(&self, frame: &FramePath) -> Result<DisplayState, CalendarError> {
        display::read_display(self, frame).await
    }

    /// Check the displayed year/month against the local system date.
    pub async fn validate_display(
        &self,
        frame: &FramePath,
    ) -> Result<ValidationReport, CalendarError> {
        display::validate_display_on(self, frame, Local::now().date_naive()).await
    }

    /// Same check against an explicit reference date.
    pub async fn validate_display_on(
        &self,
        frame: &FramePath,
        today: NaiveDate,
    ) -> Result<ValidationReport, CalendarError> {
        display::validate_display_on(self, frame, today).await
    }

    /// Check every date cell's class/handler combination against the
    /// past/future rule, collecting all deviations in one pass.
    pub async fn validate_grid(
        &self,
        frame: &FramePath,
    ) -> Result<ValidationReport, CalendarError> {
        grid::validate_grid(self, frame).await
    }

    /// Click the cell for `target`, or for today when `target` is `None`.
    pub async fn select_date(
        &self,
        frame: &FramePath,
        target: Option<NaiveDate>,
    ) -> Result<(), CalendarError> {
        select::select_date(self, frame, target).await
    }

    /// Click a uniformly random selectable cell and report which date it was.
    pub async fn select_random_available(
        &self,
        frame: &FramePath,
    ) -> Result<SelectedDate, CalendarError> {
        select::select_random_available(self, frame).await
    }
}
