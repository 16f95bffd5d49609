//! Side-by-side month rows and whole-year layout.

use tracing::debug;

use crate::error::{CalendarError, Result};
use crate::month::{GRID_WIDTH, MonthGrid, RenderOptions};
use crate::text::pad_right;

/// Width of one month column.
pub const COLUMN_WIDTH: usize = GRID_WIDTH;

/// Spaces between two month columns (also trail the last column).
pub const COLUMN_GAP: usize = 4;

/// Months per side-by-side row.
pub const MONTHS_PER_ROW: usize = 3;

/// The four quarters of a year, in calendar order.
pub const QUARTERS: [[u32; MONTHS_PER_ROW]; 4] = [[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]];

/// Length of the longest sequence, or 0 when there are none.
pub fn max_line_count(sequences: &[Vec<String>]) -> usize {
    sequences.iter().map(Vec::len).max().unwrap_or(0)
}

/// Lays out exactly three months of `year` side by side.
///
/// Each output row holds one line from every month, left-justified to
/// [`COLUMN_WIDTH`] and followed by [`COLUMN_GAP`] spaces; a month that has
/// run out of lines contributes a blank column. One blank line follows the
/// block.
///
/// The months are used in the order given, whether or not they are
/// contiguous.
///
/// # Errors
///
/// Returns [`CalendarError::MonthCount`] unless `months` has exactly three
/// entries, and any error from building the individual months.
pub fn compose_months(year: i32, months: &[u32], options: &RenderOptions) -> Result<String> {
    if months.len() != MONTHS_PER_ROW {
        return Err(CalendarError::MonthCount {
            count: months.len(),
        });
    }

    let columns = months
        .iter()
        .map(|&month| MonthGrid::build(month, year, options).map(|grid| grid.lines()))
        .collect::<Result<Vec<_>>>()?;
    let rows = max_line_count(&columns);
    debug!(year, ?months, rows, "composing month row");

    let gap = " ".repeat(COLUMN_GAP);
    let mut out = String::new();
    for row in 0..rows {
        for column in &columns {
            let line = column.get(row).map(String::as_str).unwrap_or("");
            out.push_str(&pad_right(line, COLUMN_WIDTH));
            out.push_str(&gap);
        }
        out.push('\n');
    }
    out.push('\n');
    Ok(out)
}

/// Renders all twelve months of `year`, one quarter per row.
pub fn render_year(year: i32, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    for quarter in &QUARTERS {
        out.push_str(&compose_months(year, quarter, options)?);
    }
    debug!(year, "rendered year");
    Ok(out)
}
