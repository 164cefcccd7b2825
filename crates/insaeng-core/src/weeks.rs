//! Week arithmetic over birth dates.

use std::fmt;

use chrono::NaiveDate;

/// Fixed lifespan estimate: 88 years of 52 weeks.
pub const TOTAL_WEEKS: i64 = 88 * 52;

/// The birth date string did not parse as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDateFormat;

impl fmt::Display for InvalidDateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "birth date must match YYYY-MM-DD")
    }
}

impl std::error::Error for InvalidDateFormat {}

/// Parse a birth date entered as `YYYY-MM-DD`.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, InvalidDateFormat> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| InvalidDateFormat)
}

/// Whole weeks between the birth date and `today`, partial weeks dropped.
///
/// Floor division, so a birth date in the future goes negative the same
/// way the calendar-day subtraction does. Leap years and timezones get no
/// special handling beyond what the calendar subtraction itself provides.
pub fn weeks_lived(birth: NaiveDate, today: NaiveDate) -> i64 {
    (today - birth).num_days().div_euclid(7)
}

/// Weeks left of the fixed lifespan estimate. Not clamped at zero.
pub fn weeks_remaining(lived: i64) -> i64 {
    TOTAL_WEEKS - lived
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn total_weeks_constant() {
        assert_eq!(TOTAL_WEEKS, 4576);
    }

    #[test]
    fn same_day_is_zero_weeks() {
        let birth = date(1990, 6, 15);
        assert_eq!(weeks_lived(birth, birth), 0);
    }

    #[test]
    fn partial_weeks_truncate() {
        let birth = date(1990, 6, 15);
        let six_days = birth.checked_add_days(Days::new(6)).unwrap();
        let seven_days = birth.checked_add_days(Days::new(7)).unwrap();
        assert_eq!(weeks_lived(birth, six_days), 0);
        assert_eq!(weeks_lived(birth, seven_days), 1);
    }

    #[test]
    fn fifty_two_weeks_end_to_end() {
        let today = date(2024, 11, 30);
        let birth = today.checked_sub_days(Days::new(52 * 7)).unwrap();
        let lived = weeks_lived(birth, today);
        assert_eq!(lived, 52);
        assert_eq!(weeks_remaining(lived), 4576 - 52);
    }

    #[test]
    fn future_birth_goes_negative() {
        let today = date(2024, 11, 30);
        let birth = today.checked_add_days(Days::new(1)).unwrap();
        assert_eq!(weeks_lived(birth, today), -1);
    }

    #[test]
    fn parses_dashed_dates() {
        assert_eq!(parse_birth_date("1990-06-15"), Ok(date(1990, 6, 15)));
        assert_eq!(parse_birth_date("2000-2-9"), Ok(date(2000, 2, 9)));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_birth_date("2024-13-40"), Err(InvalidDateFormat));
        assert_eq!(parse_birth_date("not-a-date"), Err(InvalidDateFormat));
        assert_eq!(parse_birth_date(""), Err(InvalidDateFormat));
        assert_eq!(parse_birth_date("1990/06/15"), Err(InvalidDateFormat));
    }
}
