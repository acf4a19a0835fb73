//! Display helpers for slugs, dates, ages, prices and text.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Characters dropped from slugs.
static SLUG_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());

/// Separator runs collapsed into a single hyphen.
static SLUG_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Build a URL slug from a title.
///
/// The result contains only lowercase ASCII letters, digits and single
/// hyphens, with no hyphen at either end.
///
/// ```
/// use lakeshore_content::format::slugify;
///
/// assert_eq!(slugify("Mittens & Co."), "mittens-co");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = SLUG_STRIP_RE.replace_all(lower.trim(), "");
    let hyphenated = SLUG_SEPARATOR_RE.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_owned()
}

/// Parse an ISO 8601 date or datetime as a UTC instant.
///
/// Date-only values are taken as midnight UTC.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_timestamp(value).map(|datetime| datetime.date_naive())
}

/// Format a date as `January 5, 2024`.
///
/// Returns `""` for `None` or an unparsable value.
#[must_use]
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Describe the age of an animal born on `dob` as of `today`.
///
/// Whole months are counted, a month being complete once the birth day of
/// month is reached; younger animals are described in days. Returns `""` when `dob` is missing,
/// unparsable or in the future.
///
/// ```
/// use chrono::NaiveDate;
/// use lakeshore_content::format::calculate_age;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// assert_eq!(calculate_age(Some("2023-04-20"), today), "1 year, 2 months old");
/// ```
#[must_use]
pub fn calculate_age(dob: Option<&str>, today: NaiveDate) -> String {
    let Some(birth) = dob.and_then(parse_date) else {
        return String::new();
    };
    if birth > today {
        return String::new();
    }

    let mut years = today.year() - birth.year();
    let mut months = i64::from(today.month()) - i64::from(birth.month());
    if today.day() < birth.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    if years == 0 {
        if months == 0 {
            let days = (today - birth).num_days();
            return format!("{days} {} old", plural(days, "day"));
        }
        return format!("{months} {} old", plural(months, "month"));
    }

    let years = i64::from(years);
    if months == 0 {
        return format!("{years} {} old", plural(years, "year"));
    }

    format!(
        "{years} {}, {months} {} old",
        plural(years, "year"),
        plural(months, "month")
    )
}

/// [`calculate_age`] as of the local calendar date.
#[must_use]
pub fn calculate_age_today(dob: Option<&str>) -> String {
    calculate_age(dob, Local::now().date_naive())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_owned()
    } else {
        format!("{unit}s")
    }
}

/// Format a price in whole US dollars (`$1,500`).
///
/// `None` reads as `Contact for price`.
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price.filter(|p| p.is_finite()) else {
        return "Contact for price".to_owned();
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let dollars = price.abs().round() as u64;
    let sign = if price.round() < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(dollars))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Shorten `text` to at most `max_chars` characters plus `...`.
///
/// Text that already fits is returned unchanged.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim())
}

/// Look up a dotted path (`"author.name"`, `"photos.0.url"`) in a JSON value.
///
/// Returns `None` if any segment is missing or the final value is `null`.
#[must_use]
pub fn safe_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for key in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    (!current.is_null()).then_some(current)
}

/// [`safe_get`] decoded as `T`, or `default` if absent or of another shape.
pub fn safe_get_or<T: DeserializeOwned>(value: &Value, path: &str, default: T) -> T {
    safe_get(value, path)
        .and_then(|found| T::deserialize(found).ok())
        .unwrap_or(default)
}
