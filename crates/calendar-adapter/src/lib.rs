//! Adapter for the license-management application's date-picker widget.
//!
//! The widget is a My97-style calendar rendered inside a chain of nested
//! frames. Selectable cells carry an inline `day_Click(year,month,day)`
//! handler; past and padding cells carry the `WinvalidDay` class instead.
//! The adapter reads the displayed year/month, validates that every cell's
//! class and handler agree with that rule, and selects dates by clicking
//! cells. It keeps no widget state of its own: every operation borrows the
//! frame path and talks to the page through a [`page_bridge::PageBridge`].
//!
//! Validation findings are data, not errors: a run that completed but found
//! deviations returns a clean `Ok` with a non-empty [`ValidationReport`],
//! while a run that could not inspect the widget at all returns a
//! [`CalendarError`].

pub mod errors;
pub mod parse;
pub mod selectors;
pub mod types;

mod adapter;
mod display;
mod grid;
mod select;

pub use adapter::CalendarAdapter;
pub use errors::*;
pub use parse::*;
pub use types::*;
