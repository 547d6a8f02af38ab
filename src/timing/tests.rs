#![cfg(test)]

use std::time::Duration;

use super::*;

#[test]
fn test_convert() {
    assert_eq!(TimeUnit::Milliseconds.convert(1, TimeUnit::Seconds), 1000);
    assert_eq!(TimeUnit::Seconds.convert(1999, TimeUnit::Milliseconds), 1, "Coarser units should truncate.");
    assert_eq!(TimeUnit::Hours.convert(2, TimeUnit::Days), 48);
    assert_eq!(TimeUnit::Days.convert(47, TimeUnit::Hours), 1);
    assert_eq!(TimeUnit::Nanoseconds.convert(7, TimeUnit::Nanoseconds), 7);
    assert_eq!(
        TimeUnit::Nanoseconds.convert(u64::MAX, TimeUnit::Days),
        u64::MAX,
        "Finer units should saturate."
    );
}

#[test]
fn test_durations() {
    assert_eq!(TimeUnit::Milliseconds.to_duration(1500), Duration::from_millis(1500));
    assert_eq!(TimeUnit::Minutes.to_duration(2), Duration::from_secs(120));
    assert_eq!(TimeUnit::Days.to_duration(u64::MAX), Duration::MAX);
    assert_eq!(TimeUnit::Microseconds.of(Duration::from_millis(3)), 3000);
}

#[test]
fn test_parse() {
    assert_eq!("ms".parse::<TimeUnit>().unwrap(), TimeUnit::Milliseconds);
    assert_eq!("days".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
    assert!("weeks".parse::<TimeUnit>().is_err());
    assert_eq!(TimeUnit::Seconds.to_string(), "seconds");
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(Duration::ZERO), "0.000000");
    assert_eq!(format_elapsed(Duration::from_nanos(999_999)), "0.999999");
    assert_eq!(format_elapsed(Duration::from_nanos(1_000_000)), "1.000000");
    assert_eq!(format_elapsed(Duration::from_secs(2)), "2000.000000");
}

#[test]
fn test_time() {
    let (elapsed, result) = time(|| {
        sleep(5, TimeUnit::Milliseconds);
        42
    });
    assert_eq!(result, 42);
    assert!(elapsed >= Duration::from_millis(5), "The sleep should be measured.");
    assert_eq!(timed("answer", || 7), 7);
}
