//! Human-readable byte-size formatting

/// Binary unit thresholds, largest first.
///
/// The magnitudes are 1024-based even though consumers of the CSV have come to
/// expect these exact labels; keep the pairing as-is.
const UNITS: [(i64, &str); 4] = [
    (1 << 40, "TiB"),
    (1 << 30, "GiB"),
    (1 << 20, "MiB"),
    (1 << 10, "KiB"),
];

/// Format a byte count as a human-readable string.
///
/// Picks the largest unit the input meets or exceeds, divides, and rounds
/// half-up to two decimal places. Anything below 1024 - including zero and
/// the negative sentinel used for unreadable files - is rendered verbatim as
/// `"<n> bytes"`, so `-1` becomes `"-1 bytes"`.
pub fn format_size(bytes: i64) -> String {
    for (threshold, unit) in UNITS {
        if bytes >= threshold {
            let scaled = bytes as f64 / threshold as f64;
            return format!("{} {}", round_to_display(scaled), unit);
        }
    }
    format!("{} bytes", bytes)
}

/// Round half-up to two decimals and render with trailing-zero trimming,
/// keeping at least one decimal digit (2.0 not 2, 2.49 not 2.490).
fn round_to_display(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let s = format!("{:.2}", rounded);
    match s.strip_suffix('0') {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_below_smallest_threshold() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1), "1 bytes");
        assert_eq!(format_size(500), "500 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
    }

    #[test]
    fn test_negative_sentinel_passthrough() {
        assert_eq!(format_size(-1), "-1 bytes");
        assert_eq!(format_size(-1024), "-1024 bytes");
        assert_eq!(format_size(i64::MIN), format!("{} bytes", i64::MIN));
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1 << 20), "1.0 MiB");
        assert_eq!(format_size(1 << 30), "1.0 GiB");
        assert_eq!(format_size(1 << 40), "1.0 TiB");
    }

    #[test]
    fn test_monotonic_within_unit_band() {
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        // one byte under the next unit stays in band
        assert_eq!(format_size((1 << 20) - 1), "1024.0 KiB");
    }

    #[test]
    fn test_round_half_up_two_decimals() {
        // 2548 / 1024 = 2.48828... -> 2.49
        assert_eq!(format_size(2548), "2.49 KiB");
        // 2560 / 1024 = 2.5 exactly
        assert_eq!(format_size(2560), "2.5 KiB");
        // 1285 / 1024 = 1.25488... -> 1.25
        assert_eq!(format_size(1285), "1.25 KiB");
    }

    #[test]
    fn test_largest_threshold_wins() {
        // 1.5 TiB must not render as 1536 GiB
        let bytes = (1i64 << 40) + (1i64 << 39);
        assert_eq!(format_size(bytes), "1.5 TiB");
    }
}
