use std::sync::LazyLock;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use regex::Regex;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

static RELATIVE_DAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(today|tomorrow)\b").unwrap());

static IN_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bin\s+(\d+)\s+(day|days|week|weeks)\b").unwrap());

static NEXT_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bnext\s+(week|month)\b").unwrap());

static WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:next\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
        .unwrap()
});

static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(january|jan|february|feb|march|mar|april|apr|may|june|jun|july|jul|august|aug|september|sept|sep|october|oct|november|nov|december|dec)\s+(\d{1,2})(?:st|nd|rd|th)?\b",
    )
    .unwrap()
});

/// Parse the first recognized natural-language date expression in the
/// line and normalize it to an ISO calendar date (`YYYY-MM-DD`).
/// Ambiguous expressions resolve forward: deadlines in a meeting
/// context are future-looking. No match yields `None`, never an error.
pub fn extract_due_date(line: &str) -> Option<String> {
    resolve_due_date(line, Local::now().date_naive()).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Date resolution with an injected "today", in fixed priority order:
/// explicit ISO date, today/tomorrow, `in N days/weeks`,
/// `next week/month`, weekday name, month-name + day. The first form
/// that matches decides the result.
pub fn resolve_due_date(line: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = line.to_lowercase();

    if let Some(c) = ISO_DATE.captures(&text) {
        let y: i32 = c[1].parse().ok()?;
        let m: u32 = c[2].parse().ok()?;
        let d: u32 = c[3].parse().ok()?;
        // Explicit dates are taken verbatim, past or future.
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            return Some(date);
        }
    }

    if let Some(c) = RELATIVE_DAY.captures(&text) {
        return match &c[1] {
            "today" => Some(today),
            _ => Some(today + Duration::days(1)),
        };
    }

    if let Some(c) = IN_OFFSET.captures(&text) {
        let n: i64 = c[1].parse().ok()?;
        // Absurd offsets are absent, not a panic: checked all the way.
        let days = if c[2].starts_with("week") {
            n.checked_mul(7)?
        } else {
            n
        };
        return today.checked_add_signed(Duration::try_days(days)?);
    }

    if let Some(c) = NEXT_PERIOD.captures(&text) {
        let days = if &c[1] == "week" { 7 } else { 30 };
        return Some(today + Duration::days(days));
    }

    if let Some(c) = WEEKDAY.captures(&text) {
        let target = parse_weekday(&c[1])?;
        return Some(next_weekday(today, target));
    }

    if let Some(c) = MONTH_DAY.captures(&text) {
        let month = parse_month(&c[1])?;
        let day: u32 = c[2].parse().ok()?;
        let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
        if this_year >= today {
            return Some(this_year);
        }
        // Already past this year: the next occurrence is meant.
        return NaiveDate::from_ymd_opt(today.year() + 1, month, day);
    }

    None
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn parse_month(s: &str) -> Option<u32> {
    let m = match s {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(m)
}

/// Strictly future occurrence of the target weekday: a deadline named
/// "Friday" on a Friday means next week's Friday.
fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut d = from + Duration::days(1);
    while d.weekday() != target {
        d += Duration::days(1);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    // A Monday, used as the fixed "today" throughout.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn iso_date_verbatim() {
        assert_eq!(
            resolve_due_date("Ship v2 by 2025-01-10", monday()),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
    }

    #[test]
    fn today_and_tomorrow() {
        assert_eq!(resolve_due_date("finish this today", monday()), Some(monday()));
        assert_eq!(
            resolve_due_date("send it tomorrow", monday()),
            NaiveDate::from_ymd_opt(2025, 6, 3)
        );
    }

    #[test]
    fn in_n_days_and_weeks() {
        assert_eq!(
            resolve_due_date("circle back in 3 days", monday()),
            NaiveDate::from_ymd_opt(2025, 6, 5)
        );
        assert_eq!(
            resolve_due_date("review again in 2 weeks", monday()),
            NaiveDate::from_ymd_opt(2025, 6, 16)
        );
    }

    #[test]
    fn huge_day_offset_is_absent() {
        // Beyond the calendar range: must resolve to absent, not panic.
        assert!(resolve_due_date("revisit in 100000000000 days", monday()).is_none());
    }

    #[test]
    fn huge_week_offset_is_absent() {
        // Large enough to overflow the day multiplication.
        assert!(resolve_due_date("revisit in 9000000000000000000 weeks", monday()).is_none());
    }

    #[test]
    fn next_week_and_month() {
        assert_eq!(
            resolve_due_date("demo next week", monday()),
            NaiveDate::from_ymd_opt(2025, 6, 9)
        );
        assert_eq!(
            resolve_due_date("renewal due next month", monday()),
            NaiveDate::from_ymd_opt(2025, 7, 2)
        );
    }

    #[test]
    fn weekday_resolves_forward() {
        // Friday after Monday 2025-06-02 is 2025-06-06.
        assert_eq!(
            resolve_due_date("report due by friday", monday()),
            NaiveDate::from_ymd_opt(2025, 6, 6)
        );
        assert_eq!(
            resolve_due_date("sync on next Friday", monday()),
            NaiveDate::from_ymd_opt(2025, 6, 6)
        );
    }

    #[test]
    fn same_weekday_skips_to_next_week() {
        // "Monday" spoken on a Monday means the following Monday.
        assert_eq!(
            resolve_due_date("kickoff on monday", monday()),
            NaiveDate::from_ymd_opt(2025, 6, 9)
        );
    }

    #[test]
    fn month_day_prefers_future() {
        // January has already passed relative to June: next year.
        assert_eq!(
            resolve_due_date("audit due january 10", monday()),
            NaiveDate::from_ymd_opt(2026, 1, 10)
        );
        // September is still ahead: this year.
        assert_eq!(
            resolve_due_date("conference on september 3rd", monday()),
            NaiveDate::from_ymd_opt(2025, 9, 3)
        );
    }

    #[test]
    fn invalid_month_day_is_absent() {
        assert!(resolve_due_date("due february 30", monday()).is_none());
    }

    #[test]
    fn no_date_is_absent() {
        assert!(resolve_due_date("Alice will send the report", monday()).is_none());
    }

    #[test]
    fn normalized_format_is_iso() {
        let s = extract_due_date("due 2030-12-01").unwrap();
        assert_eq!(s, "2030-12-01");
    }
}
