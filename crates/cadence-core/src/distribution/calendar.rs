//! Lazy publish-date calendar.

use jiff::civil::Date;

use crate::models::PublishDays;

/// Iterator over the days of a window that fall on a publish weekday.
///
/// Yields dates in ascending order from `start` to `end`, both inclusive.
/// The iterator owns its cursor, so cloning it restarts from the same point
/// without touching any shared state.
///
/// ```rust
/// use cadence_core::{distribution::PublishCalendar, models::PublishDays};
/// use jiff::civil::date;
///
/// let days = PublishDays::from_indices([1]).unwrap(); // Mondays
/// let mondays: Vec<_> = PublishCalendar::new(date(2024, 3, 1), date(2024, 3, 31), days).collect();
/// assert_eq!(mondays, vec![date(2024, 3, 4), date(2024, 3, 11), date(2024, 3, 18), date(2024, 3, 25)]);
/// ```
#[derive(Debug, Clone)]
pub struct PublishCalendar {
    next: Option<Date>,
    end: Date,
    days: PublishDays,
}

impl PublishCalendar {
    /// Creates a calendar for the inclusive window `start..=end`.
    pub fn new(start: Date, end: Date, days: PublishDays) -> Self {
        let next = if days.is_empty() || start > end {
            None
        } else {
            Some(start)
        };
        Self { next, end, days }
    }
}

impl Iterator for PublishCalendar {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        while let Some(day) = self.next {
            // `tomorrow` only fails past Date::MAX, which ends the window too.
            self.next = day.tomorrow().ok().filter(|next| *next <= self.end);
            if self.days.contains(day.weekday()) {
                return Some(day);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, Weekday};

    use super::*;
    use crate::models::weekday_index;

    fn days(indices: &[u8]) -> PublishDays {
        PublishDays::from_indices(indices.iter().copied()).unwrap()
    }

    #[test]
    fn test_calendar_is_inclusive_on_both_ends() {
        // 2024-03-01 is a Friday, 2024-04-01 a Monday
        let dates: Vec<Date> =
            PublishCalendar::new(date(2024, 3, 1), date(2024, 4, 1), days(&[1, 5])).collect();

        assert_eq!(dates.first(), Some(&date(2024, 3, 1)));
        assert_eq!(dates.last(), Some(&date(2024, 4, 1)));
        assert_eq!(dates.len(), 10);
    }

    #[test]
    fn test_calendar_matches_day_by_day_count() {
        let start = date(2024, 1, 15);
        let end = date(2024, 2, 15);
        let publish = days(&[0, 2, 3]);

        let mut expected = 0;
        let mut day = start;
        while day <= end {
            if publish.contains_index(weekday_index(day.weekday())) {
                expected += 1;
            }
            day = day.tomorrow().unwrap();
        }

        let calendar = PublishCalendar::new(start, end, publish);
        assert_eq!(calendar.count(), expected);
    }

    #[test]
    fn test_calendar_only_yields_publish_weekdays() {
        let calendar = PublishCalendar::new(date(2024, 5, 1), date(2024, 6, 30), days(&[6]));
        assert!(calendar.clone().all(|d| d.weekday() == Weekday::Saturday));
        assert!(calendar.clone().zip(calendar.skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn test_calendar_is_restartable() {
        let calendar = PublishCalendar::new(date(2024, 3, 1), date(2024, 3, 31), days(&[1, 3]));
        let first: Vec<Date> = calendar.clone().collect();
        let second: Vec<Date> = calendar.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_calendar_empty_cases() {
        let start = date(2024, 3, 1);
        assert_eq!(
            PublishCalendar::new(start, date(2024, 3, 31), PublishDays::default()).count(),
            0
        );
        assert_eq!(
            PublishCalendar::new(start, date(2024, 2, 1), days(&[1])).count(),
            0
        );
        // Single-day window on a non-publish day
        assert_eq!(PublishCalendar::new(start, start, days(&[1])).count(), 0);
    }

    #[test]
    fn test_calendar_stops_at_max_date() {
        let dates: Vec<Date> =
            PublishCalendar::new(Date::MAX, Date::MAX, days(&[0, 1, 2, 3, 4, 5, 6])).collect();
        assert_eq!(dates, vec![Date::MAX]);
    }
}
