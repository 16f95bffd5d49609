//! Single-month grids.

use std::fmt;
use std::iter;

use chrono::{Datelike, Month, NaiveDate, Weekday};
use owo_colors::OwoColorize;
use tracing::{debug, trace};

use crate::error::{CalendarError, Result};
use crate::text::center;

/// Width of a rendered month, title and weekday header included.
pub const GRID_WIDTH: usize = 20;

/// Weekday header, Sunday first.
pub const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// One empty day cell.
const BLANK_CELL: &str = "   ";

/// Options shared by every render call.
///
/// `today` is injected by the caller instead of being read from the clock
/// here. With `None` nothing is highlighted and the output depends only on
/// the month and year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub today: Option<NaiveDate>,
}

impl RenderOptions {
    /// Highlight `today` wherever it appears.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    /// Never highlight anything.
    pub fn plain() -> Self {
        Self { today: None }
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange { year })
}

/// Every date of the month starting at `first`.
///
/// Stops at `NaiveDate::MAX` instead of needing a date after it.
fn dates_of_month(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let month = first.month();
    iter::successors(Some(first), |d| d.succ_opt()).take_while(move |d| d.month() == month)
}

/// Number of days in `month` of `year`.
///
/// Counts the dates from the first of the month until the month changes,
/// so leap years follow the Gregorian rule.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    Ok(dates_of_month(first).count() as u32)
}

/// Sunday-based weekday index (0..=6) of the first day of the month.
pub fn weekday_offset(year: i32, month: u32) -> Result<u32> {
    Ok(first_of_month(year, month)?.weekday().num_days_from_sunday())
}

/// Number of day rows a month needs.
pub fn week_rows(offset: u32, days: u32) -> u32 {
    (offset + days).div_ceil(7)
}

/// Leading blank cells that push day 1 under its weekday column.
pub fn blank_cells(offset: u32) -> String {
    BLANK_CELL.repeat(offset as usize)
}

fn month_name(month: u32) -> Result<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or(CalendarError::InvalidMonth { month })
}

/// A fully rendered month: centered title, weekday header, day rows.
///
/// Every day row ends with a newline, and one more newline closes the
/// grid, so a month ending on Saturday ends with an empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    text: String,
}

impl MonthGrid {
    /// Renders `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12
    /// and [`CalendarError::YearOutOfRange`] for a year chrono cannot
    /// represent.
    pub fn build(month: u32, year: i32, options: &RenderOptions) -> Result<Self> {
        let first = first_of_month(year, month)?;
        let days = days_in_month(year, month)?;
        let offset = first.weekday().num_days_from_sunday();
        trace!(year, month, offset, days, "month geometry");

        let title = format!("{} {}", month_name(month)?, year);
        let mut text = center(GRID_WIDTH, &title);
        text.push('\n');
        text.push_str(WEEKDAY_HEADER);
        text.push('\n');
        text.push_str(&blank_cells(offset));

        for date in dates_of_month(first) {
            let cell = format!("{:2}", date.day());
            if options.today == Some(date) {
                text.push_str(&cell.black().on_white().to_string());
            } else {
                text.push_str(&cell);
            }
            text.push(' ');
            if date.weekday() == Weekday::Sat {
                text.push('\n');
            }
        }
        text.push('\n');

        debug!(year, month, rows = week_rows(offset, days), "built month grid");
        Ok(Self { year, month, text })
    }

    /// Returns the year the grid was built for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12) the grid was built for.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The raw grid text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Splits the grid into right-trimmed lines, dropping the empty ones.
    ///
    /// Line order is kept so that line N of one month can be placed next
    /// to line N of another.
    pub fn lines(&self) -> Vec<String> {
        self.text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders a single month as text.
pub fn render_month(month: u32, year: i32, options: &RenderOptions) -> Result<String> {
    Ok(MonthGrid::build(month, year, options)?.text)
}

/// Renders a single month as a sequence of non-empty trimmed lines.
pub fn month_lines(month: u32, year: i32, options: &RenderOptions) -> Result<Vec<String>> {
    Ok(MonthGrid::build(month, year, options)?.lines())
}
