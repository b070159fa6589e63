use chrono::{DateTime, Utc};

/// Human "time ago" label for a creation timestamp
pub fn format_relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if seconds < 3_600 {
        (elapsed.num_minutes(), "minute")
    } else if seconds < 86_400 {
        (elapsed.num_hours(), "hour")
    } else if seconds < 86_400 * 30 {
        (elapsed.num_days(), "day")
    } else if seconds < 86_400 * 365 {
        (elapsed.num_days() / 30, "month")
    } else {
        (elapsed.num_days() / 365, "year")
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    #[test]
    fn recent_is_just_now() {
        assert_eq!(format_relative_time(now() - Duration::seconds(30), now()), "just now");
        // Clock skew: a timestamp in the future is still "just now"
        assert_eq!(format_relative_time(now() + Duration::minutes(5), now()), "just now");
    }

    #[test]
    fn singular_and_plural_units() {
        assert_eq!(format_relative_time(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(format_relative_time(now() - Duration::minutes(59), now()), "59 minutes ago");
        assert_eq!(format_relative_time(now() - Duration::hours(3), now()), "3 hours ago");
        assert_eq!(format_relative_time(now() - Duration::days(1), now()), "1 day ago");
        assert_eq!(format_relative_time(now() - Duration::days(65), now()), "2 months ago");
        assert_eq!(format_relative_time(now() - Duration::days(800), now()), "2 years ago");
    }
}
