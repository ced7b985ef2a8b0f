use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Today,
    Yesterday,
    Week,
    Month,
}

impl Period {
    pub fn parse(value: &str) -> Option<Period> {
        match value {
            "today" => Some(Period::Today),
            "yesterday" => Some(Period::Yesterday),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Yesterday => "yesterday",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    // None means the window stays open through the present moment.
    pub end: Option<DateTime<Utc>>,
}

// All bounds are UTC. Single-day periods are closed windows; week and month
// stay open through the present moment.
pub fn resolve_window(period: Period, now: DateTime<Utc>) -> TimeWindow {
    match period {
        Period::Today => closed_day_window(now.date_naive()),
        Period::Yesterday => closed_day_window(now.date_naive() - Duration::days(1)),
        Period::Week => {
            // num_days_from_monday treats Sunday as day 7, not day 1.
            let offset = now.weekday().num_days_from_monday() as i64;
            let monday = now.date_naive() - Duration::days(offset);
            TimeWindow {
                start: day_start(monday),
                end: None,
            }
        }
        Period::Month => {
            let first = now.date_naive().with_day(1).expect("every month has a day 1");
            TimeWindow {
                start: day_start(first),
                end: None,
            }
        }
    }
}

fn closed_day_window(day: NaiveDate) -> TimeWindow {
    TimeWindow {
        start: day_start(day),
        end: Some(day_end(day)),
    }
}

fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc()
}

fn day_end(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_milli_opt(23, 59, 59, 999)
        .expect("last millisecond of the day exists")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Weekday};

    #[test]
    fn today_is_a_closed_day_window() {
        let now = Utc.with_ymd_and_hms(2024, 7, 10, 15, 42, 7).unwrap();
        let window = resolve_window(Period::Today, now);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 7, 10, 0, 0, 0).unwrap());
        let end = window.end.unwrap();
        assert_eq!(end.date_naive(), now.date_naive());
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        assert_eq!(end.timestamp_subsec_millis(), 999);
        assert!(window.start <= end);
    }

    #[test]
    fn yesterday_covers_the_prior_calendar_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let window = resolve_window(Period::Yesterday, now);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert_eq!(window.end.unwrap().date_naive(), window.start.date_naive());
    }

    #[test]
    fn week_starts_on_the_preceding_monday_and_stays_open() {
        // Wednesday.
        let now = Utc.with_ymd_and_hms(2024, 7, 10, 12, 0, 0).unwrap();
        let window = resolve_window(Period::Week, now);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 7, 8, 0, 0, 0).unwrap());
        assert_eq!(window.start.weekday(), Weekday::Mon);
        assert_eq!(window.end, None);
    }

    #[test]
    fn sunday_counts_as_day_seven_of_the_week() {
        let now = Utc.with_ymd_and_hms(2024, 7, 14, 6, 30, 0).unwrap();
        assert_eq!(now.weekday(), Weekday::Sun);

        let window = resolve_window(Period::Week, now);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 7, 8, 0, 0, 0).unwrap());
    }

    #[test]
    fn month_starts_on_the_first_and_stays_open() {
        let now = Utc.with_ymd_and_hms(2024, 7, 23, 22, 11, 5).unwrap();
        let window = resolve_window(Period::Month, now);

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, None);
    }

    #[test]
    fn only_the_four_period_keys_parse() {
        assert_eq!(Period::parse("today"), Some(Period::Today));
        assert_eq!(Period::parse("yesterday"), Some(Period::Yesterday));
        assert_eq!(Period::parse("week"), Some(Period::Week));
        assert_eq!(Period::parse("month"), Some(Period::Month));
        assert_eq!(Period::parse("all"), None);
        assert_eq!(Period::parse("Week"), None);
    }
}
