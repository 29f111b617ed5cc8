const UNITS: [&str; 6] = ["Bytes", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with 1024-based units and at most two decimals.
///
/// Trailing zeros are dropped: `1536` is `1.5 KB`, `1024` is `1 KB`.
pub fn format_bytes(bytes: u64) -> String {
    let mut exponent = 0;
    let mut threshold: u64 = 1024;
    while exponent < UNITS.len() - 1 && bytes >= threshold {
        exponent += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}
