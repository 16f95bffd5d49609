use std::ffi::OsStr;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Parser;

/// Print a month or a whole year as a text calendar.
///
/// With no arguments the current month is shown. A single argument is a
/// year; two arguments are a month and a year.
#[derive(Parser, Debug)]
#[command(name = "cal", version, about = "Print a month or a whole year as a text calendar")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not highlight today's date.
    #[arg(long)]
    pub no_color: bool,

    /// Treat this date (YYYY-MM-DD) as today instead of reading the clock.
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Month (1-12) when a year follows, otherwise the year to print.
    #[arg(value_name = "MONTH_OR_YEAR", allow_negative_numbers = true)]
    pub first: Option<String>,

    /// Year of the month given first.
    #[arg(value_name = "YEAR", allow_negative_numbers = true)]
    pub second: Option<String>,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Month { month: u32, year: i32 },
    Year { year: i32 },
}

impl Cli {
    /// Resolves the positional arguments against `today`.
    pub fn request(&self, today: NaiveDate) -> Result<Request> {
        match (self.first.as_deref(), self.second.as_deref()) {
            (None, _) => Ok(Request::Month {
                month: today.month(),
                year: today.year(),
            }),
            (Some(year), None) => Ok(Request::Year {
                year: parse_year(year)?,
            }),
            (Some(month), Some(year)) => {
                let month = month
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("error parsing month {month:?}"))?;
                Ok(Request::Month {
                    month,
                    year: parse_year(year)?,
                })
            }
        }
    }

    /// Whether today's date should be highlighted.
    ///
    /// Off with `--no-color`, with a non-empty `NO_COLOR` value, or when
    /// stdout is not a terminal.
    pub fn highlight(&self, no_color_env: Option<&OsStr>, stdout_is_terminal: bool) -> bool {
        !self.no_color && no_color_env.is_none_or(OsStr::is_empty) && stdout_is_terminal
    }
}

fn parse_year(s: &str) -> Result<i32> {
    s.trim()
        .parse::<i32>()
        .with_context(|| format!("error parsing year {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cal").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_is_current_month() {
        let cli = parse(&[]);
        assert_eq!(
            cli.request(today()).unwrap(),
            Request::Month {
                month: 10,
                year: 2026
            }
        );
    }

    #[test]
    fn one_argument_is_year() {
        let cli = parse(&["2023"]);
        assert_eq!(cli.request(today()).unwrap(), Request::Year { year: 2023 });
    }

    #[test]
    fn negative_year_accepted() {
        let cli = parse(&["-44"]);
        assert_eq!(cli.request(today()).unwrap(), Request::Year { year: -44 });
    }

    #[test]
    fn two_arguments_are_month_then_year() {
        let cli = parse(&["7", "2025"]);
        assert_eq!(
            cli.request(today()).unwrap(),
            Request::Month {
                month: 7,
                year: 2025
            }
        );
    }

    #[test]
    fn non_numeric_year_is_error() {
        let cli = parse(&["abc"]);
        let err = cli.request(today()).unwrap_err();
        assert!(format!("{err:#}").starts_with("error parsing year \"abc\""));
    }

    #[test]
    fn non_numeric_month_is_error() {
        let cli = parse(&["jul", "2025"]);
        let err = cli.request(today()).unwrap_err();
        assert!(format!("{err:#}").starts_with("error parsing month \"jul\""));
    }

    #[test]
    fn too_many_arguments_is_usage_error() {
        let err = Cli::try_parse_from(["cal", "1", "2", "3"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn highlight_on_terminal_by_default() {
        assert!(parse(&[]).highlight(None, true));
        assert!(parse(&[]).highlight(Some(OsStr::new("")), true));
    }

    #[test]
    fn highlight_off_when_piped() {
        assert!(!parse(&[]).highlight(None, false));
    }

    #[test]
    fn highlight_off_with_no_color_env() {
        assert!(!parse(&[]).highlight(Some(OsStr::new("1")), true));
    }

    #[test]
    fn highlight_off_with_no_color_flag() {
        assert!(!parse(&["--no-color"]).highlight(None, true));
    }

    #[test]
    fn today_override_and_flags() {
        let cli = parse(&["--today", "2024-02-29", "--no-color", "-vv"]);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }
}
