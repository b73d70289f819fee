use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use repit_types::RestDayPolicy;

/// Resolves rest-day status across the frozen/live boundary. Dates
/// strictly before `today` read the frozen flags carried by log rows
/// (false when no row was ever flagged); `today` and later derive the
/// answer from the weekday policy.
#[derive(Debug, Clone)]
pub struct RestDayCalendar {
    today: NaiveDate,
    policy: RestDayPolicy,
    flagged: HashSet<NaiveDate>,
}

impl RestDayCalendar {
    pub fn new(today: NaiveDate, policy: RestDayPolicy, flagged: HashSet<NaiveDate>) -> Self {
        Self {
            today,
            policy,
            flagged,
        }
    }

    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        if date < self.today {
            self.flagged.contains(&date)
        } else {
            self.policy.is_rest_day(date.weekday())
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{NaiveDate, Weekday};
    use repit_types::RestDayPolicy;

    use super::RestDayCalendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_reads_frozen_flags_not_policy() {
        // 2024-11-04 is a Monday; Mondays are rest days in the live policy.
        let mut policy = RestDayPolicy::default();
        policy.set(Weekday::Mon, true);

        let flagged = HashSet::from([date(2024, 10, 30)]);
        let calendar = RestDayCalendar::new(date(2024, 11, 6), policy, flagged);

        // Last Monday has no frozen flag, so the policy does not apply.
        assert!(!calendar.is_rest_day(date(2024, 11, 4)));
        // A flagged past Wednesday stays a rest day.
        assert!(calendar.is_rest_day(date(2024, 10, 30)));
    }

    #[test]
    fn today_and_future_read_policy() {
        let mut policy = RestDayPolicy::default();
        policy.set(Weekday::Wed, true);

        let calendar = RestDayCalendar::new(date(2024, 11, 6), policy, HashSet::new());

        // Today is Wednesday 2024-11-06.
        assert!(calendar.is_rest_day(date(2024, 11, 6)));
        // Next Wednesday too, flag or no flag.
        assert!(calendar.is_rest_day(date(2024, 11, 13)));
        // Thursday is not.
        assert!(!calendar.is_rest_day(date(2024, 11, 7)));
    }

    #[test]
    fn unflagged_past_defaults_to_false() {
        let calendar =
            RestDayCalendar::new(date(2024, 11, 6), RestDayPolicy::default(), HashSet::new());
        assert!(!calendar.is_rest_day(date(2024, 1, 1)));
    }
}
