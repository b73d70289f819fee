use chrono::{Datelike, Days, Months, NaiveDate};
use repit_algos::RestDayCalendar;
use repit_types::ExerciseLog;

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(first);
    (first, last)
}

/// Month grid, Sunday-first. Each logged day gets a marker: `*` when
/// the goal was met, `.` when anything was logged, `R` for rest days.
pub fn render_month(
    date: NaiveDate,
    logs: &[ExerciseLog],
    calendar: &RestDayCalendar,
) -> String {
    let (first, last) = month_bounds(date);

    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", first.format("%B %Y")));
    out.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");

    let offset = first.weekday().num_days_from_sunday() as usize;
    out.push_str(&"    ".repeat(offset));

    let mut day = first;
    loop {
        let log = logs.iter().find(|l| l.date == day);
        let marker = if calendar.is_rest_day(day) {
            'R'
        } else if log.is_some_and(ExerciseLog::goal_met) {
            '*'
        } else if log.is_some_and(|l| l.reps > 0) {
            '.'
        } else {
            ' '
        };

        out.push_str(&format!("{:>3}{}", day.day(), marker));

        if day.weekday().num_days_from_sunday() == 6 {
            out.push('\n');
        }
        if day == last {
            break;
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }

    out
}
