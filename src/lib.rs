//! # cal
//!
//! Text calendars: a single month, or a whole year laid out three months
//! per row, with the current day optionally highlighted.
//!
//! ```
//! use cal::{RenderOptions, render_month, render_year};
//!
//! # fn main() -> cal::Result<()> {
//! let july = render_month(7, 2025, &RenderOptions::plain())?;
//! assert!(july.starts_with("     July 2025"));
//!
//! let year = render_year(2023, &RenderOptions::plain())?;
//! assert!(year.contains("December 2023"));
//! # Ok(())
//! # }
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `text` | Centering and escape-aware padding |
//! | `month` | Month grids and their line decomposition |
//! | `layout` | Three-month rows and whole years |
//! | `error` | Error types |

mod error;
mod layout;
mod month;
mod text;

pub use error::{CalendarError, Result};
pub use layout::{
    COLUMN_GAP, COLUMN_WIDTH, MONTHS_PER_ROW, QUARTERS, compose_months, max_line_count,
    render_year,
};
pub use month::{
    GRID_WIDTH, MonthGrid, RenderOptions, WEEKDAY_HEADER, blank_cells, days_in_month,
    month_lines, render_month, week_rows, weekday_offset,
};
pub use text::{center, pad_right, strip_ansi, visible_width};
