//! Human friendly "time from now" text for dates sent by the API
//!
//! Thresholds follow the ones commonly used on the web (date-fns
//! `formatDistance` without seconds) so the text matches what users of the
//! web client already see.

use chrono::{Datelike as _, NaiveDateTime, Timelike as _};

/// Default text shown for a date that was never set (e.g. a bar never checked)
pub const NEVER: &str = "Never";

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Formats `date` relative to `now`, e.g. "5 minutes ago" or "in about 2
/// hours". Returns `never_text` if there is no date.
pub fn format_from_now(date: Option<NaiveDateTime>, now: NaiveDateTime, never_text: &str) -> String {
    let Some(date) = date else {
        return never_text.to_string();
    };
    let is_future = date > now;
    let (earlier, later) = if is_future { (now, date) } else { (date, now) };
    let distance = distance_text(earlier, later);
    if is_future {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// Same as [`format_from_now`] using the local clock and [`NEVER`]
pub fn format_from_now_local(date: Option<NaiveDateTime>) -> String {
    format_from_now(date, chrono::Local::now().naive_local(), NEVER)
}

fn distance_text(earlier: NaiveDateTime, later: NaiveDateTime) -> String {
    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {} hours", round_div(minutes, 60));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return format!("{} days", round_div(minutes, MINUTES_IN_DAY));
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return plural("about", round_div(minutes, MINUTES_IN_MONTH), "month");
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        return plural("", round_div(minutes, MINUTES_IN_MONTH), "month");
    }
    let months_since_start_of_year = months % 12;
    let years = months / 12;
    if months_since_start_of_year < 3 {
        plural("about", years, "year")
    } else if months_since_start_of_year < 9 {
        plural("over", years, "year")
    } else {
        plural("almost", years + 1, "year")
    }
}

fn plural(qualifier: &str, count: i64, unit: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    if qualifier.is_empty() {
        format!("{count} {unit}{suffix}")
    } else {
        format!("{qualifier} {count} {unit}{suffix}")
    }
}

/// Rounds half up, valid for non-negative numerators
fn round_div(numerator: i64, denominator: i64) -> i64 {
    (numerator * 2 + denominator) / (denominator * 2)
}

/// Number of full calendar months between the two dates
fn calendar_months_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    let later_in_month = (later.day(), later.num_seconds_from_midnight());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_in_month < earlier_in_month {
        months -= 1;
    }
    months
}
