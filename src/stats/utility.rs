/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Formats seconds as `[D day[s], ]H:MM:SS[.ffffff]`.
///
/// Fractional seconds are kept to the microsecond and only shown when
/// non-zero.
pub fn format_duration(seconds: f64) -> String {
    let micros = (seconds.max(0.0) * 1_000_000.0).round() as u64;
    let (whole, frac) = (micros / 1_000_000, micros % 1_000_000);

    let days = whole / 86_400;
    let hours = whole % 86_400 / 3_600;
    let minutes = whole % 3_600 / 60;
    let secs = whole % 60;

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{days} {unit}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{secs:02}"));
    if frac > 0 {
        out.push_str(&format!(".{frac:06}"));
    }
    out
}
