//! Display formatting shared by the chat list and the shift card

use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

/// Zero-padded `HH:MM` in the timestamp's own zone
pub fn clock_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%H:%M").to_string()
}

/// Three-letter weekday label, Monday first
pub fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// `D/M` with no leading zeros and no year
pub fn day_month(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), date.month())
}

/// Card date label, e.g. `Mar 5, 2024`
pub fn card_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Hourly pay rounded half-up to whole dollars
pub fn pay_rate(rate: f64) -> String {
    // f64::round rounds half away from zero, which is half-up for pay rates
    format!("${:.0}/hr", rate.round())
}

/// Distance label; whole miles keep one decimal (`12.0 mi`)
pub fn distance(miles: f64) -> String {
    if miles.is_finite() && miles.fract() == 0.0 {
        format!("{:.1} mi", miles)
    } else {
        format!("{} mi", miles)
    }
}

pub fn match_score(score: u32) -> String {
    format!("{}%", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_clock_time_pads() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        assert_eq!(clock_time(&dt), "09:00");

        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 5, 0).unwrap();
        assert_eq!(clock_time(&dt), "14:05");
    }

    #[test]
    fn test_clock_time_uses_own_offset() {
        let tz = FixedOffset::east_opt(-5 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2024, 3, 15, 7, 30, 0).unwrap();
        assert_eq!(clock_time(&dt), "07:30");
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_abbrev(Weekday::Mon), "Mon");
        assert_eq!(weekday_abbrev(Weekday::Sun), "Sun");
    }

    #[test]
    fn test_day_month() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(day_month(date), "1/2");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(day_month(date), "25/12");
    }

    #[test]
    fn test_card_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(card_date(date), "Mar 5, 2024");

        let date = NaiveDate::from_ymd_opt(2024, 11, 21).unwrap();
        assert_eq!(card_date(date), "Nov 21, 2024");
    }

    #[test]
    fn test_pay_rate_rounding() {
        assert_eq!(pay_rate(24.6), "$25/hr");
        assert_eq!(pay_rate(24.4), "$24/hr");
        assert_eq!(pay_rate(24.5), "$25/hr");
        assert_eq!(pay_rate(40.0), "$40/hr");
    }

    #[test]
    fn test_distance_and_score() {
        assert_eq!(distance(2.5), "2.5 mi");
        assert_eq!(distance(12.0), "12.0 mi");
        assert_eq!(distance(0.0), "0.0 mi");
        assert_eq!(match_score(0), "0%");
        assert_eq!(match_score(92), "92%");
    }
}
