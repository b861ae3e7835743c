//! 时间解析工具

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{Result, TrackerError};

/// 不带时区的表单时间格式（按 UTC 解释）
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// 解析截止时间
///
/// 依次尝试 RFC 3339、`datetime-local` 风格的无时区时间和纯日期（当天零点）。
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TrackerError::validation("due_date is required"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| TrackerError::date_parse(format!("invalid due_date '{raw}': {e}")))?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TrackerError::date_parse(format!("invalid due_date '{raw}'")))
}
