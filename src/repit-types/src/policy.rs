use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Week in the order the policy is stored: Sunday first, index 0.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Storage index of a weekday, Sunday = 0 through Saturday = 6.
pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

#[derive(Debug, Error)]
#[error("{self:?}")]
pub enum PolicyError {
    TooManyRestDays { requested: usize },
}

/// Live weekday → rest-day mapping. Applies to today and future dates
/// only; past dates keep the frozen flag on their log rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestDayPolicy {
    days: [bool; 7],
}

impl RestDayPolicy {
    pub const MAX_REST_DAYS: usize = 3;

    pub fn is_rest_day(&self, weekday: Weekday) -> bool {
        self.days[weekday_index(weekday)]
    }

    pub fn set(&mut self, weekday: Weekday, rest: bool) {
        self.days[weekday_index(weekday)] = rest;
    }

    pub fn rest_count(&self) -> usize {
        self.days.iter().filter(|d| **d).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, bool)> + '_ {
        WEEK.into_iter().map(|w| (w, self.is_rest_day(w)))
    }

    pub fn rest_weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.iter().filter(|(_, rest)| *rest).map(|(w, _)| w)
    }

    /// Builds a policy marking exactly the given weekdays as rest days.
    pub fn from_rest_weekdays<I>(weekdays: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut policy = Self::default();
        for weekday in weekdays {
            policy.set(weekday, true);
        }
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        let requested = self.rest_count();
        if requested > Self::MAX_REST_DAYS {
            return Err(PolicyError::TooManyRestDays { requested });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::{PolicyError, RestDayPolicy};

    #[test]
    fn default_policy_has_no_rest_days() {
        let policy = RestDayPolicy::default();
        assert_eq!(policy.rest_count(), 0);
        assert!(!policy.is_rest_day(Weekday::Mon));
    }

    #[test]
    fn set_and_read_back() {
        let mut policy = RestDayPolicy::default();
        policy.set(Weekday::Sun, true);
        policy.set(Weekday::Wed, true);
        assert!(policy.is_rest_day(Weekday::Sun));
        assert!(policy.is_rest_day(Weekday::Wed));
        assert!(!policy.is_rest_day(Weekday::Sat));
        assert_eq!(policy.rest_weekdays().collect::<Vec<_>>(), vec![
            Weekday::Sun,
            Weekday::Wed
        ]);
    }

    #[test]
    fn four_rest_days_rejected() {
        let result = RestDayPolicy::from_rest_weekdays([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
        ]);
        assert!(matches!(
            result,
            Err(PolicyError::TooManyRestDays { requested: 4 })
        ));
    }

    #[test]
    fn three_rest_days_allowed() {
        let policy =
            RestDayPolicy::from_rest_weekdays([Weekday::Mon, Weekday::Wed, Weekday::Fri]).unwrap();
        assert_eq!(policy.rest_count(), 3);
    }
}
