//! Error types for the cal crate.

/// Error type for all fallible calendar rendering operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The month number that was provided.
        month: u32,
    },

    /// Returned when the year cannot be represented as a Gregorian date.
    #[error("year {year} is out of the supported range")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a side-by-side row is not given exactly three months.
    #[error("invalid argument count: expected exactly 3 months, got {count}")]
    MonthCount {
        /// Number of months supplied.
        count: usize,
    },
}

/// Result alias for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let e = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(e.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_year_out_of_range() {
        let e = CalendarError::YearOutOfRange { year: 300_000 };
        assert_eq!(e.to_string(), "year 300000 is out of the supported range");
    }

    #[test]
    fn error_month_count() {
        let e = CalendarError::MonthCount { count: 2 };
        assert_eq!(
            e.to_string(),
            "invalid argument count: expected exactly 3 months, got 2"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
