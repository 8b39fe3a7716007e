//! Integration tests for pandemic-common crate.

use chrono::NaiveDate;
use pandemic_common::{parse_day_header, slugify, Metric, PandemicError, TrailingWindow};
use proptest::prelude::*;

#[test]
fn test_fixture_headers_parse_as_days() {
    let header = "Province/State,Country/Region,Lat,Long,1/30/20,1/31/20,2/1/20,2/2/20";
    let days: Vec<NaiveDate> = header.split(',').skip(4).filter_map(parse_day_header).collect();

    assert_eq!(days.len(), 4);
    assert!(days.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_window_errors_are_validation_errors() {
    let err = "5X".parse::<TrailingWindow>().unwrap_err();
    assert!(matches!(err, PandemicError::Validation { .. }));
}

#[test]
fn test_metric_serializes_lowercase() {
    let json = serde_json::to_string(&Metric::Recovered).unwrap();
    assert_eq!(json, "\"recovered\"");
}

proptest! {
    #[test]
    fn prop_slug_is_file_name_safe(name in "\\PC{0,40}") {
        let slug = slugify(&name);
        prop_assert!(!slug.is_empty());
        prop_assert!(!slug.contains('/'));
        prop_assert!(!slug.starts_with('_'));
        prop_assert!(!slug.ends_with('_'));
    }

    #[test]
    fn prop_window_display_parses_back(n in 1u32..500, unit in 0usize..3) {
        let window = match unit {
            0 => TrailingWindow::Days(n),
            1 => TrailingWindow::Weeks(n),
            _ => TrailingWindow::Months(n),
        };
        prop_assert_eq!(window.to_string().parse::<TrailingWindow>().unwrap(), window);
    }
}
