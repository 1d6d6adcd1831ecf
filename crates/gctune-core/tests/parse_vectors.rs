//! Byte-size and collector-trigger parser vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gctune_core::tuning::{parse_byte_size, parse_gc_trigger, GcTrigger};

#[test]
fn size_binary_suffixes() {
    assert_eq!(parse_byte_size("30MiB"), Some(30 << 20));
    assert_eq!(parse_byte_size("1KiB"), Some(1024));
    assert_eq!(parse_byte_size("2GiB"), Some(2 << 30));
    assert_eq!(parse_byte_size("1TiB"), Some(1 << 40));
}

#[test]
fn size_decimal_suffixes() {
    assert_eq!(parse_byte_size("30M"), Some(30_000_000));
    assert_eq!(parse_byte_size("30MB"), Some(30_000_000));
    assert_eq!(parse_byte_size("5K"), Some(5_000));
    assert_eq!(parse_byte_size("1G"), Some(1_000_000_000));
}

#[test]
fn size_plain_bytes_and_b_suffix() {
    assert_eq!(parse_byte_size("1048576"), Some(1 << 20));
    assert_eq!(parse_byte_size("512B"), Some(512));
    assert_eq!(parse_byte_size("0"), Some(0));
}

#[test]
fn size_case_and_whitespace_tolerant() {
    assert_eq!(parse_byte_size("30mib"), Some(30 << 20));
    assert_eq!(parse_byte_size("30MIB"), Some(30 << 20));
    assert_eq!(parse_byte_size(" 30 MiB "), Some(30 << 20));
}

#[test]
fn size_fractional_mantissa() {
    assert_eq!(parse_byte_size("1.5KiB"), Some(1536));
    assert_eq!(parse_byte_size("0.5MiB"), Some(512 << 10));
}

#[test]
fn size_rejects_garbage() {
    for bad in ["", "abc", "MiB", "-1MiB", "10XB", "1.2.3K", "."] {
        assert_eq!(parse_byte_size(bad), None, "input: {bad:?}");
    }
}

#[test]
fn size_rejects_overflow() {
    assert_eq!(parse_byte_size("999999999999999999999"), None);
    assert_eq!(parse_byte_size("18446744073709551615TiB"), None);
}

#[test]
fn trigger_positive_percent() {
    assert_eq!(parse_gc_trigger("100"), Some(GcTrigger::Percent(100)));
    assert_eq!(parse_gc_trigger("1"), Some(GcTrigger::Percent(1)));
    assert_eq!(parse_gc_trigger("400"), Some(GcTrigger::Percent(400)));
}

#[test]
fn trigger_off_token() {
    assert_eq!(parse_gc_trigger("off"), Some(GcTrigger::Disabled));
    // Token match is exact.
    assert_eq!(parse_gc_trigger("OFF"), None);
    assert_eq!(parse_gc_trigger(" off"), None);
}

#[test]
fn trigger_rejects_zero_negative_and_junk() {
    for bad in ["", "0", "-5", "10%", "ten", "1.5"] {
        assert_eq!(parse_gc_trigger(bad), None, "input: {bad:?}");
    }
}
