//! Relative token ages ("2h", "3d") from `createdAt` metadata.

use crate::directory::TokenMeta;
use chrono::{DateTime, Duration, Utc};

/// Placeholder for a missing or unparsable timestamp.
pub const NOT_AVAILABLE: &str = "n/a";

/// Placeholder for a timestamp further in the future than clock skew explains.
pub const INVALID: &str = "<invalid>";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const YEAR: i64 = 365 * DAY;

/// Age of a token relative to `now`. Never fails.
pub fn humanize(meta: &TokenMeta, now: DateTime<Utc>) -> String {
    let Some(raw) = meta.created_at.as_deref() else {
        return NOT_AVAILABLE.to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(created) => humanize_duration(now.signed_duration_since(created.with_timezone(&Utc))),
        Err(e) => {
            tracing::debug!(created_at = raw, error = %e, "unparsable token timestamp");
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Render an elapsed span in its largest whole unit, truncated.
pub fn humanize_duration(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds();
    // Tolerate one second of skew between our clock and the server's.
    if secs < -1 {
        return INVALID.to_string();
    }
    let secs = secs.max(0);
    if secs < MINUTE {
        format!("{}s", secs)
    } else if secs < HOUR {
        format!("{}m", secs / MINUTE)
    } else if secs < DAY {
        format!("{}h", secs / HOUR)
    } else if secs < YEAR {
        format!("{}d", secs / DAY)
    } else {
        format!("{}y", secs / YEAR)
    }
}
