use chrono::TimeDelta;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = level_for(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitcalc={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

fn level_for(verbose: u8, quiet: u8) -> &'static str {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    }
}

/// Convert fractional hours into a time delta, `None` when out of range.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hours_to_delta(hours: f64) -> Option<TimeDelta> {
    let ms = (hours * 3_600_000.0).round();
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(ms as i64)
}

#[must_use]
pub fn format_duration(d: TimeDelta) -> String {
    let secs = d.num_seconds().unsigned_abs();
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    format!("{sign}{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0, 0), "info");
        assert_eq!(level_for(1, 0), "debug");
        assert_eq!(level_for(5, 0), "trace");
        assert_eq!(level_for(0, 1), "warn");
        assert_eq!(level_for(0, 3), "error");
        assert_eq!(level_for(2, 2), "info");
    }

    #[test]
    fn formats_fractional_hours() {
        let d = hours_to_delta(1.5).unwrap();
        assert_eq!(format_duration(d), "01:30:00");
        let d = hours_to_delta(0.25).unwrap();
        assert_eq!(format_duration(d), "00:15:00");
    }

    #[test]
    fn negative_duration_keeps_sign() {
        let d = hours_to_delta(-1.0).unwrap();
        assert_eq!(format_duration(d), "-01:00:00");
        let d = hours_to_delta(-0.0).unwrap();
        assert_eq!(format_duration(d), "00:00:00");
    }

    #[test]
    fn rejects_non_finite_hours() {
        assert!(hours_to_delta(f64::NAN).is_none());
        assert!(hours_to_delta(f64::INFINITY).is_none());
    }
}
