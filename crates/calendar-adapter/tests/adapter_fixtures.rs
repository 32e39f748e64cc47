//! Adapter behavior against canned widget snapshots.
//!
//! Each test registers the DOM state a rendered picker would expose and
//! drives the adapter through the same bridge surface the CDP backend
//! implements. Timeouts are tightened so absent-element paths fail fast.

use std::sync::Arc;
use std::time::Duration;

use calendar_adapter::{
    selectors, CalendarAdapter, CalendarError, CalendarTimeouts, HandlerDate, Mismatch,
    SelectedDate, INVALID_DAY_CLASS,
};
use chrono::NaiveDate;
use page_bridge::{ElementSnapshot, FramePath, StaticBridge};

/// Frame chain the application hosts the picker in.
fn picker_frame() -> FramePath {
    FramePath::root()
        .child("#leftFrame")
        .child("[title=\"mainFrame\"]")
        .child("frame[name=\"table_main\"]")
        .child("div#_my97DP iframe")
}

fn adapter_over(bridge: Arc<StaticBridge>) -> CalendarAdapter {
    CalendarAdapter::with_timeouts(
        bridge,
        CalendarTimeouts {
            read: Duration::from_millis(50),
            click: Duration::from_millis(50),
        },
    )
}

fn register_header(bridge: &StaticBridge, frame: &FramePath, year: &str, month: &str) {
    bridge.insert(
        frame,
        selectors::YEAR_INPUT,
        vec![ElementSnapshot::new("").with_attribute("value", year)],
    );
    bridge.insert(
        frame,
        selectors::MONTH_INPUT,
        vec![ElementSnapshot::new("").with_attribute("value", month)],
    );
}

fn past_cell(day: u32) -> ElementSnapshot {
    ElementSnapshot::new(day.to_string()).with_attribute("class", INVALID_DAY_CLASS)
}

fn future_cell(year: i32, month: u32, day: u32) -> ElementSnapshot {
    ElementSnapshot::new(day.to_string())
        .with_attribute("class", "Wday")
        .with_attribute("onclick", format!("day_Click({year},{month},{day})"))
}

#[tokio::test]
async fn read_display_returns_raw_control_values() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    register_header(&bridge, &frame, "2025", "十一");

    let adapter = adapter_over(bridge);
    let state = adapter.read_display(&frame).await.unwrap();
    assert_eq!(state.year, "2025");
    assert_eq!(state.month_token, "十一");
}

#[tokio::test]
async fn display_validation_accepts_matching_november() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    register_header(&bridge, &frame, "2025", "十一");

    let adapter = adapter_over(bridge);
    let today = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
    let report = adapter.validate_display_on(&frame, today).await.unwrap();
    assert!(report.is_clean());
}

#[tokio::test]
async fn display_validation_reports_both_fields_together() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    register_header(&bridge, &frame, "2024", "五");

    let adapter = adapter_over(bridge);
    let today = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
    let report = adapter.validate_display_on(&frame, today).await.unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(
        report.mismatches[0],
        Mismatch::YearMismatch {
            expected: "2025".to_string(),
            actual: "2024".to_string(),
        }
    );
    assert_eq!(
        report.mismatches[1],
        Mismatch::MonthMismatch {
            expected: "十一".to_string(),
            actual: "五".to_string(),
        }
    );
}

#[tokio::test]
async fn display_validation_is_idempotent_without_widget_mutation() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    register_header(&bridge, &frame, "2023", "一");

    let adapter = adapter_over(bridge);
    let today = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
    let first = adapter.validate_display_on(&frame, today).await.unwrap();
    let second = adapter.validate_display_on(&frame, today).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn display_read_fails_not_found_when_controls_never_appear() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();

    let adapter = adapter_over(bridge);
    let err = adapter.read_display(&frame).await.unwrap_err();
    assert!(matches!(err, CalendarError::NotFound(_)));
}

#[tokio::test]
async fn conforming_grid_yields_clean_report() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    bridge.insert(
        &frame,
        selectors::GRID_CELLS,
        vec![
            ElementSnapshot::new(""), // leading padding
            past_cell(3),
            past_cell(24),
            future_cell(2025, 11, 25),
            future_cell(2025, 11, 30),
            ElementSnapshot::new(" "), // trailing padding
        ],
    );

    let adapter = adapter_over(bridge);
    let report = adapter.validate_grid(&frame).await.unwrap();
    assert!(report.is_clean());
}

#[tokio::test]
async fn grid_violations_are_collected_in_one_pass() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    bridge.insert(
        &frame,
        selectors::GRID_CELLS,
        vec![
            // selectable cell wrongly styled as invalid
            ElementSnapshot::new("25")
                .with_attribute("class", "WinvalidDay Wday")
                .with_attribute("onclick", "day_Click(2025,11,25)"),
            // handlerless cell with the wrong class
            ElementSnapshot::new("3").with_attribute("class", "Wday"),
            // non-parsing handler on an invalid-styled cell
            ElementSnapshot::new("4")
                .with_attribute("class", INVALID_DAY_CLASS)
                .with_attribute("onclick", "openMenu()"),
        ],
    );

    let adapter = adapter_over(bridge);
    let report = adapter.validate_grid(&frame).await.unwrap();

    assert_eq!(report.len(), 3);
    assert!(report.mismatches.iter().any(|m| matches!(
        m,
        Mismatch::FutureCellClass { date, .. }
            if *date == HandlerDate { year: 2025, month: 11, day: 25 }
    )));
    assert!(report
        .mismatches
        .iter()
        .any(|m| matches!(m, Mismatch::PastCellClass { text, .. } if text == "3")));
    assert!(report
        .mismatches
        .iter()
        .any(|m| matches!(m, Mismatch::PastCellHasHandler { text, .. } if text == "4")));
}

#[tokio::test]
async fn select_date_clicks_exactly_the_matching_cell() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    bridge.insert(
        &frame,
        &selectors::day_cell(2025, 11, 25),
        vec![future_cell(2025, 11, 25)],
    );

    let adapter = adapter_over(Arc::clone(&bridge));
    let target = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
    adapter.select_date(&frame, Some(target)).await.unwrap();

    let clicks = bridge.clicks();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].selector, selectors::day_cell(2025, 11, 25));
    assert_eq!(clicks[0].index, 0);
    assert_eq!(clicks[0].frame, frame);
}

#[tokio::test]
async fn select_date_times_out_as_not_found_when_cell_is_missing() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();

    let adapter = adapter_over(Arc::clone(&bridge));
    let target = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    let err = adapter.select_date(&frame, Some(target)).await.unwrap_err();

    assert!(matches!(err, CalendarError::NotFound(_)));
    assert!(bridge.clicks().is_empty());
}

#[tokio::test]
async fn random_selection_fails_without_candidates() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    bridge.insert(&frame, selectors::SELECTABLE_CELLS, Vec::new());

    let adapter = adapter_over(bridge);
    let err = adapter.select_random_available(&frame).await.unwrap_err();
    assert!(matches!(err, CalendarError::NoAvailableDate));
}

#[tokio::test]
async fn random_selection_with_single_candidate_returns_that_date() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    bridge.insert(
        &frame,
        selectors::SELECTABLE_CELLS,
        vec![future_cell(2025, 12, 31)],
    );

    let adapter = adapter_over(Arc::clone(&bridge));
    let selected = adapter.select_random_available(&frame).await.unwrap();

    assert_eq!(
        selected,
        SelectedDate::Known(HandlerDate {
            year: 2025,
            month: 12,
            day: 31
        })
    );
    let clicks = bridge.clicks();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].selector, selectors::SELECTABLE_CELLS);
    assert_eq!(clicks[0].index, 0);
}

#[tokio::test]
async fn random_selection_reports_unknown_when_handler_does_not_reparse() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    bridge.insert(
        &frame,
        selectors::SELECTABLE_CELLS,
        vec![ElementSnapshot::new("25")
            .with_attribute("class", "Wday")
            .with_attribute("onclick", "day_Click_legacy(25)")],
    );

    let adapter = adapter_over(Arc::clone(&bridge));
    let selected = adapter.select_random_available(&frame).await.unwrap();

    assert_eq!(selected, SelectedDate::Unknown);
    assert_eq!(bridge.clicks().len(), 1);
}

#[tokio::test]
async fn random_selection_always_picks_within_candidates() {
    let bridge = Arc::new(StaticBridge::new());
    let frame = picker_frame();
    bridge.insert(
        &frame,
        selectors::SELECTABLE_CELLS,
        vec![
            future_cell(2025, 11, 25),
            future_cell(2025, 11, 26),
            future_cell(2025, 11, 27),
        ],
    );

    let adapter = adapter_over(Arc::clone(&bridge));
    for _ in 0..16 {
        let selected = adapter.select_random_available(&frame).await.unwrap();
        match selected {
            SelectedDate::Known(date) => {
                assert_eq!(date.year, 2025);
                assert_eq!(date.month, 11);
                assert!((25..=27).contains(&date.day));
            }
            SelectedDate::Unknown => panic!("fixture handlers always parse"),
        }
    }
    let clicks = bridge.clicks();
    assert_eq!(clicks.len(), 16);
    assert!(clicks.iter().all(|click| click.index < 3));
}
