use std::collections::HashSet;

use chrono::NaiveDate;

use crate::helpers::date_math::distinct_sorted;

/// Longest run of logged days within `dates`. A day extends the run when
/// it is exactly one day after the previous logged day, when the
/// previous logged day is flagged as a rest day (the flag bridges the
/// gap regardless of its width), or when the day right before it is
/// flagged (a rest day needs no entry of its own to bridge). Only
/// logged days count toward the length.
pub fn longest_streak(dates: &[NaiveDate], rest_flagged: &HashSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut current = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for date in distinct_sorted(dates) {
        let continues = previous.is_some_and(|prev| {
            prev.succ_opt() == Some(date)
                || rest_flagged.contains(&prev)
                || date.pred_opt().is_some_and(|eve| rest_flagged.contains(&eve))
        });
        current = if continues { current + 1 } else { 1 };
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

/// Trailing streak ending at the most recent logged day. Walking
/// backward, a day is accepted when it is the most recent entry, exactly
/// one day before the previously accepted day, or itself flagged as a
/// rest day; the first day failing all three ends the walk.
pub fn current_streak(dates: &[NaiveDate], rest_flagged: &HashSet<NaiveDate>) -> u32 {
    let mut streak = 0u32;
    let mut accepted: Option<NaiveDate> = None;

    for date in distinct_sorted(dates).into_iter().rev() {
        let take = match accepted {
            None => true,
            Some(prev) => date.succ_opt() == Some(prev) || rest_flagged.contains(&date),
        };
        if !take {
            break;
        }
        streak += 1;
        accepted = Some(date);
    }

    streak
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::{current_streak, longest_streak};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn empty_dates_give_zero() {
        let rest = HashSet::new();
        assert_eq!(longest_streak(&[], &rest), 0);
        assert_eq!(current_streak(&[], &rest), 0);
    }

    #[test]
    fn single_day_is_a_streak_of_one() {
        let rest = HashSet::new();
        assert_eq!(longest_streak(&[date(10)], &rest), 1);
        assert_eq!(current_streak(&[date(10)], &rest), 1);
    }

    #[test]
    fn consecutive_days_accumulate() {
        let rest = HashSet::new();
        let dates = [date(1), date(2), date(3)];
        assert_eq!(longest_streak(&dates, &rest), 3);
        assert_eq!(current_streak(&dates, &rest), 3);
    }

    #[test]
    fn plain_gap_resets_longest() {
        let rest = HashSet::new();
        let dates = [date(1), date(2), date(5), date(6), date(7)];
        assert_eq!(longest_streak(&dates, &rest), 3);
    }

    #[test]
    fn rest_day_bridges_gap_in_longest() {
        // Logged 1st, 2nd and 4th; the 3rd is a rest day with no entry
        // of its own required beyond its flag. Only logged days count.
        let rest = HashSet::from([date(3)]);
        let dates = [date(1), date(2), date(4)];
        assert_eq!(longest_streak(&dates, &rest), 3);
    }

    #[test]
    fn two_day_gap_with_one_flag_does_not_bridge_longest() {
        // 3rd flagged but the 4th is a plain miss: 5th starts over.
        let rest = HashSet::from([date(3)]);
        let dates = [date(1), date(2), date(5)];
        assert_eq!(longest_streak(&dates, &rest), 2);
    }

    #[test]
    fn longest_uses_previous_day_flag() {
        // The 2nd is flagged, so the jump 2nd -> 5th continues the run.
        let rest = HashSet::from([date(2)]);
        let dates = [date(1), date(2), date(5)];
        assert_eq!(longest_streak(&dates, &rest), 3);
    }

    #[test]
    fn wide_gap_after_unflagged_day_resets() {
        let rest = HashSet::from([date(20)]);
        let dates = [date(1), date(2), date(10), date(11)];
        assert_eq!(longest_streak(&dates, &rest), 2);
    }

    #[test]
    fn current_accepts_most_recent_unconditionally() {
        let rest = HashSet::new();
        // Last log is far in the past relative to other entries.
        let dates = [date(1), date(2), date(20)];
        assert_eq!(current_streak(&dates, &rest), 1);
    }

    #[test]
    fn current_walks_back_over_consecutive_days() {
        let rest = HashSet::new();
        let dates = [date(1), date(5), date(6), date(7)];
        assert_eq!(current_streak(&dates, &rest), 3);
    }

    #[test]
    fn current_uses_own_day_flag_to_bridge() {
        // 7th and 6th consecutive; 3rd is itself flagged so it is
        // accepted despite the gap, and the 2nd chains onto it.
        let rest = HashSet::from([date(3)]);
        let dates = [date(2), date(3), date(6), date(7)];
        assert_eq!(current_streak(&dates, &rest), 4);

        // Without the 2nd the walk still reaches the flagged 3rd, then
        // breaks on the unflagged, non-adjacent 1st.
        let dates = [date(1), date(3), date(6), date(7)];
        assert_eq!(current_streak(&dates, &rest), 3);
    }

    #[test]
    fn current_breaks_on_first_failure() {
        let rest = HashSet::new();
        let dates = [date(1), date(2), date(4), date(5)];
        assert_eq!(current_streak(&dates, &rest), 2);
    }

    #[test]
    fn duplicate_dates_count_once() {
        let rest = HashSet::new();
        let dates = [date(1), date(1), date(2), date(2)];
        assert_eq!(longest_streak(&dates, &rest), 2);
        assert_eq!(current_streak(&dates, &rest), 2);
    }
}
