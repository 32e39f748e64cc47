//! Selector vocabulary for the picker's DOM.

/// Year control: first input sibling after the active year-menu marker.
pub const YEAR_INPUT: &str = ".menuSel.YMenu ~ input";

/// Month control: first input sibling after the active month-menu marker.
pub const MONTH_INPUT: &str = ".menuSel.MMenu ~ input";

/// Every cell in the grid rows after the weekday header row.
pub const GRID_CELLS: &str = "table.WdayTable tr + tr td";

/// Any selectable cell, i.e. one carrying a `day_Click` handler.
pub const SELECTABLE_CELLS: &str = r#"td[onclick*="day_Click"]"#;

/// Cell carrying the exact `day_Click(year,month,day)` fragment. The widget
/// writes literal integers with no leading zeros.
pub fn day_cell(year: i32, month: u32, day: u32) -> String {
    format!(r#"td[onclick*="day_Click({year},{month},{day})"]"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_cell_has_no_leading_zeros() {
        assert_eq!(
            day_cell(2026, 1, 5),
            r#"td[onclick*="day_Click(2026,1,5)"]"#
        );
    }
}
