//! Date labels for the popup.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Label for an upcoming fixture relative to `now`, in `now`'s timezone.
///
/// The day count is the difference between calendar dates, not elapsed
/// hours: a 09:00 kick-off seen at 23:00 the night before is "Tomorrow".
pub fn format_relative_date<Tz>(fixture: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = fixture.with_timezone(&now.timezone());
    let days = (local.date_naive() - now.date_naive()).num_days();
    let time = local.format("%H:%M");

    match days {
        0 => format!("Today at {time}"),
        1 => format!("Tomorrow at {time}"),
        -1 => format!("Yesterday at {time}"),
        n if n < 0 => format!("{} days ago at {time}", -n),
        n => format!("in {n} days at {time}"),
    }
}

/// Label for a played match: day of month and abbreviated month, `"1 Mar"`.
pub fn format_past_date<Tz>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz).format("%-d %b").to_string()
}

/// Label for when the cached league data was last written, `"10 Mar at 14:05"`.
pub fn format_updated_at<Tz>(updated: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = updated.with_timezone(&now.timezone());
    if local.date_naive() == now.date_naive() {
        format!("today at {}", local.format("%H:%M"))
    } else {
        local.format("%-d %b at %H:%M").to_string()
    }
}
