//! Tests for coordinate construction, equality, formatting and parsing

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::coordinate::{Coordinate, ParseError};

fn hash_of(coordinate: &Coordinate) -> u64 {
    let mut hasher = DefaultHasher::new();
    coordinate.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_in_range_values_are_kept() {
    let c = Coordinate::new(45.5, -122.25);
    assert_eq!(c.latitude(), 45.5);
    assert_eq!(c.longitude(), -122.25);

    let edge = Coordinate::new(-90.0, 180.0);
    assert_eq!(edge.latitude(), -90.0);
    assert_eq!(edge.longitude(), 180.0);
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let high = Coordinate::new(91.0, 200.0);
    assert_eq!(high.latitude(), 90.0);
    assert_eq!(high.longitude(), 180.0);

    let low = Coordinate::new(-91.0, -200.0);
    assert_eq!(low.latitude(), -90.0);
    assert_eq!(low.longitude(), -180.0);

    let infinite = Coordinate::new(f64::INFINITY, f64::NEG_INFINITY);
    assert_eq!(infinite.latitude(), 90.0);
    assert_eq!(infinite.longitude(), -180.0);
}

#[test]
fn test_nan_is_preserved() {
    let c = Coordinate::new(f64::NAN, 10.0);
    assert!(c.latitude().is_nan());
    assert_eq!(c.longitude(), 10.0);

    let d = Coordinate::new(10.0, f64::NAN);
    assert!(d.longitude().is_nan());
    assert_ne!(d, d);
}

#[test]
fn test_equality() {
    assert_eq!(Coordinate::new(1.0, 2.0), Coordinate::new(1.0, 2.0));
    assert_ne!(Coordinate::new(1.0, 2.0), Coordinate::new(2.0, 1.0));
    assert_eq!(Coordinate::new(0.0, 5.0), Coordinate::new(-0.0, 5.0));
}

#[test]
fn test_equal_values_hash_equal() {
    assert_eq!(hash_of(&Coordinate::new(1.0, 2.0)), hash_of(&Coordinate::new(1.0, 2.0)));
    assert_eq!(hash_of(&Coordinate::new(0.0, -0.0)), hash_of(&Coordinate::new(-0.0, 0.0)));
}

#[test]
fn test_hash_is_order_sensitive() {
    assert_ne!(hash_of(&Coordinate::new(1.0, 2.0)), hash_of(&Coordinate::new(2.0, 1.0)));
}

#[test]
fn test_display_is_latitude_first() {
    assert_eq!(Coordinate::new(45.5, -122.25).to_string(), "45.5,-122.25");
    assert_eq!(Coordinate::new(1.0, 2.0).to_string(), "1,2");
}

#[test]
fn test_parse_reads_longitude_first() {
    let c = Coordinate::parse("12.5,45.0").unwrap();
    assert_eq!(c.latitude(), 45.0);
    assert_eq!(c.longitude(), 12.5);
}

#[test]
fn test_parse_trims_whitespace() {
    let c = Coordinate::parse("  -73.5 ,\t40.25 ").unwrap();
    assert_eq!(c.latitude(), 40.25);
    assert_eq!(c.longitude(), -73.5);
}

#[test]
fn test_parse_clamps() {
    let c = Coordinate::parse("200,95").unwrap();
    assert_eq!(c.latitude(), 90.0);
    assert_eq!(c.longitude(), 180.0);
}

// Formatting is latitude first, parsing is longitude first, so a formatted
// coordinate comes back with its fields swapped.
#[test]
fn test_format_then_parse_swaps_fields() {
    let original = Coordinate::new(10.0, 20.0);
    let reparsed = Coordinate::parse(&original.to_string()).unwrap();

    assert_eq!(reparsed.latitude(), original.longitude());
    assert_eq!(reparsed.longitude(), original.latitude());
    assert_ne!(reparsed, original);

    let symmetric = Coordinate::new(33.0, 33.0);
    assert_eq!(Coordinate::parse(&symmetric.to_string()).unwrap(), symmetric);
}

#[test]
fn test_parse_rejects_zero_pair() {
    assert!(Coordinate::parse("0,0").is_err());
    assert!(Coordinate::parse("0.0, -0.0").is_err());

    let c = Coordinate::parse("0,5").unwrap();
    assert_eq!(c.latitude(), 5.0);
    assert_eq!(c.longitude(), 0.0);
}

#[test]
fn test_parse_rejects_malformed_input() {
    for text in ["abc,45", "1,2,3", "1", "", ",", "12.5,", "12.5;45"] {
        assert!(Coordinate::parse(text).is_err(), "expected '{}' to fail", text);
    }
}

#[test]
fn test_parse_error_names_input() {
    let err = Coordinate::parse("abc,45").unwrap_err();
    assert_eq!(err, ParseError::new("abc,45"));
    assert_eq!(err.text(), "abc,45");
    assert_eq!(err.to_string(), "failed parsing 'abc,45' as coordinate");
}

#[test]
fn test_from_str() {
    let c: Coordinate = "4.9041,52.3676".parse().unwrap();
    assert_eq!(c, Coordinate::new(52.3676, 4.9041));
    assert!("nowhere".parse::<Coordinate>().is_err());
}

#[test]
fn test_parse_rejects_short_infinity_spellings() {
    for text in ["inf,5", "5,-inf", "INF,5", "infinity,5", "nan,5", "Inf,5"] {
        assert!(Coordinate::parse(text).is_err(), "expected '{}' to fail", text);
    }
}

#[test]
fn test_parse_accepts_exact_word_spellings() {
    let c = Coordinate::parse("Infinity,5").unwrap();
    assert_eq!(c.latitude(), 5.0);
    assert_eq!(c.longitude(), 180.0);

    let d = Coordinate::parse("5,-Infinity").unwrap();
    assert_eq!(d.latitude(), -90.0);

    let e = Coordinate::parse("NaN,5").unwrap();
    assert!(e.longitude().is_nan());
    assert_eq!(e.latitude(), 5.0);
}
