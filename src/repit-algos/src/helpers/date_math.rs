use chrono::NaiveDate;

/// Average of `total` over `days`, 0.0 when there are no days to divide by.
pub fn safe_average(total: i64, days: i64) -> f64 {
    if days <= 0 {
        0.0
    } else {
        total as f64 / days as f64
    }
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Sorted distinct copy of the input dates.
pub fn distinct_sorted(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut dates = dates.to_vec();
    dates.sort_unstable();
    dates.dedup();
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn safe_average_divides() {
        assert_eq!(safe_average(70, 5), 14.0);
    }

    #[test]
    fn safe_average_zero_days() {
        assert_eq!(safe_average(70, 0), 0.0);
        assert_eq!(safe_average(70, -3), 0.0);
    }

    #[test]
    fn round_float_basic() {
        assert_eq!(round_float(14.285714), 14.29);
        assert_eq!(round_float(0.0), 0.0);
    }

    #[test]
    fn distinct_sorted_dedups_and_orders() {
        let dates = vec![date(5), date(1), date(5), date(3)];
        assert_eq!(distinct_sorted(&dates), vec![date(1), date(3), date(5)]);
    }
}
