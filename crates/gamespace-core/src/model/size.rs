//! Size formatting utilities: human-readable byte counts and percentages.
//!
//! All internal sizes are `u64` bytes. Floating point is only used
//! at the display-formatting boundary.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Divides by 1024 while the value is at least 1024, stopping at TB, and
/// prints at most two fractional digits with trailing zeros trimmed:
/// `1536` is `"1.5 KB"`, `1_073_741_824` is `"1 GB"`.
///
/// Each step divides the integer remainder, so only the final step
/// contributes a fraction.
pub fn format_size(bytes: u64) -> String {
    let mut whole = bytes;
    let mut value = bytes as f64;
    let mut unit = 0;

    while whole >= 1024 && unit < UNITS.len() - 1 {
        value = whole as f64 / 1024.0;
        whole /= 1024;
        unit += 1;
    }

    format!("{} {}", trim_fraction(value), UNITS[unit])
}

/// Format `part` as a whole-number percentage of `total`, e.g. `"30%"`.
///
/// Halves round away from zero. A zero `total` yields `"0%"` rather than
/// dividing by zero.
pub fn format_percentage(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let percent = (part as f64 / total as f64 * 100.0).round();
    format!("{percent:.0}%")
}

/// Render with up to two decimals, dropping trailing zeros and a bare point.
fn trim_fraction(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1280), "1.25 KB");
    }

    #[test]
    fn test_format_size_rounds_to_two_digits() {
        // 1234 / 1024 = 1.205078...
        assert_eq!(format_size(1234), "1.21 KB");
    }

    #[test]
    fn test_format_size_mb() {
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(10 * 1_048_576 + 524_288), "10.5 MB");
    }

    #[test]
    fn test_format_size_gb() {
        assert_eq!(format_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_size_tb() {
        assert_eq!(format_size(1_099_511_627_776), "1 TB");
    }

    #[test]
    fn test_format_size_stops_at_tb() {
        assert_eq!(format_size(2048 * 1_099_511_627_776), "2048 TB");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50, 100), "50%");
        assert_eq!(format_percentage(0, 100), "0%");
        assert_eq!(format_percentage(100, 100), "100%");
        assert_eq!(format_percentage(300, 1000), "30%");
    }

    #[test]
    fn test_format_percentage_rounds_half_away_from_zero() {
        assert_eq!(format_percentage(1, 8), "13%");
        assert_eq!(format_percentage(1, 400), "0%");
        assert_eq!(format_percentage(1, 3), "33%");
        assert_eq!(format_percentage(2, 3), "67%");
    }

    #[test]
    fn test_format_percentage_zero_total() {
        assert_eq!(format_percentage(10, 0), "0%");
    }
}
