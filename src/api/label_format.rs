use chrono::DateTime;

/// Compact axis/tooltip value label: `950`, `12.5K`, `3M`.
#[must_use]
pub fn format_value_label(value: i64) -> String {
    let magnitude = value.unsigned_abs();
    if magnitude >= 1_000_000 {
        format!("{}M", scaled_one_decimal(value, 1_000_000))
    } else if magnitude >= 1_000 {
        format!("{}K", scaled_one_decimal(value, 1_000))
    } else {
        value.to_string()
    }
}

fn scaled_one_decimal(value: i64, unit: i64) -> String {
    // Truncated, not rounded: 1_999 renders as `1.9K`.
    let tenths = value / (unit / 10);
    let whole = tenths / 10;
    let fraction = (tenths % 10).abs();
    if fraction == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Short month/day label for a unix timestamp, e.g. `Mar 05`.
#[must_use]
pub fn format_date_label(unix_seconds: i64) -> String {
    format_timestamp(unix_seconds, "%b %d")
}

/// Year label for a unix timestamp, e.g. `2019`.
#[must_use]
pub fn format_year_label(unix_seconds: i64) -> String {
    format_timestamp(unix_seconds, "%Y")
}

fn format_timestamp(unix_seconds: i64, pattern: &str) -> String {
    match DateTime::from_timestamp(unix_seconds, 0) {
        Some(time) => time.format(pattern).to_string(),
        None => unix_seconds.to_string(),
    }
}

/// Deterministic, backend-independent text width estimate.
pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_labels_use_compact_suffixes() {
        assert_eq!(format_value_label(0), "0");
        assert_eq!(format_value_label(950), "950");
        assert_eq!(format_value_label(3_000), "3K");
        assert_eq!(format_value_label(12_550), "12.5K");
        assert_eq!(format_value_label(2_400_000), "2.4M");
        assert_eq!(format_value_label(-1_500), "-1.5K");
        assert_eq!(format_value_label(-1_050), "-1K");
    }

    #[test]
    fn date_labels_use_utc() {
        // 2019-03-05T00:00:00Z
        assert_eq!(format_date_label(1_551_744_000), "Mar 05");
        assert_eq!(format_year_label(1_551_744_000), "2019");
    }

    #[test]
    fn width_estimate_never_drops_below_font_size() {
        assert_eq!(estimate_label_text_width_px("1", 12.0), 12.0);
        assert!(estimate_label_text_width_px("Mar 05", 12.0) > 12.0);
    }
}
