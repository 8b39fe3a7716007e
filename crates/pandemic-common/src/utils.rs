//! Shared utility functions.

use chrono::NaiveDate;

/// Header format used by the day columns of the source tables (`M/D/YY`).
pub const DAY_COLUMN_FORMAT: &str = "%m/%d/%y";

/// Parses a day-column header such as `1/22/20` into a date.
///
/// ISO dates (`2020-01-22`) are accepted as well.
pub fn parse_day_header(header: &str) -> Option<NaiveDate> {
    let header = header.trim();
    NaiveDate::parse_from_str(header, DAY_COLUMN_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(header, "%Y-%m-%d"))
        .ok()
}

/// Formats a date for display.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Display name for an optional country filter.
pub fn region_display_name(country: Option<&str>) -> &str {
    country.unwrap_or("World")
}

/// Turns a region name into a lowercase file-name fragment.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "region".to_string()
    } else {
        slug.to_string()
    }
}
