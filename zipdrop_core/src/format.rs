//! Human-readable byte counts.

/// Units used for display, indexed by power of 1024
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const K: u64 = 1024;

/// Format a byte count as a magnitude string, e.g. `1500` -> `"1.46 KB"`.
///
/// The value is rounded to at most two decimals and trailing zeros are
/// dropped. Counts past the GB range stay in GB (`1 TiB` -> `"1024 GB"`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // floor(log1024(bytes)), clamped to the unit table
    let mut unit_idx = 0;
    let mut divisor = 1u64;
    while unit_idx < SIZE_UNITS.len() - 1 && bytes / divisor >= K {
        divisor *= K;
        unit_idx += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit_idx])
}
