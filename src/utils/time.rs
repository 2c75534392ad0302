//! Timestamp helpers for suggested filenames

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a UTC instant as a filename-safe ISO 8601 stamp
///
/// The layout matches `YYYY-MM-DDTHH:MM:SS.mmmZ` with every `:` and `.`
/// replaced by `-`.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use b64_inspect::utils::time::filename_timestamp;
///
/// let at = Utc.timestamp_millis_opt(1_704_164_645_678).unwrap();
/// assert_eq!(filename_timestamp(at), "2024-01-02T03-04-05-678Z");
/// ```
pub fn filename_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Filename-safe stamp for the current instant
pub fn now_filename_timestamp() -> String {
    filename_timestamp(Utc::now())
}
