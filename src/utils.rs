use std::time::Duration;

/// Scale a count into a short label with a K/M/G/T suffix.
///
/// Thresholds are strict, so exactly 1000 stays `"1000"`. Values that are
/// not scaled keep their own shortest representation; scaled values always
/// carry two decimals. `n` must be finite and non-negative.
pub fn scale_number(n: f64) -> String {
    if n > 1_000_000_000_000.0 {
        scaled(n, 1_000_000_000_000.0, 'T')
    } else if n > 1_000_000_000.0 {
        scaled(n, 1_000_000_000.0, 'G')
    } else if n > 1_000_000.0 {
        scaled(n, 1_000_000.0, 'M')
    } else if n > 1_000.0 {
        scaled(n, 1_000.0, 'K')
    } else {
        format!("{n}")
    }
}

/// Halves round up (1.125 -> "1.13"); `{:.2}` alone would round them to even.
fn scaled(n: f64, unit: f64, suffix: char) -> String {
    let hundredths = (n / unit * 100.0).round() / 100.0;
    format!("{hundredths:.2}{suffix}")
}

/// `H:MM:SS` for the session clock.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_are_unchanged() {
        assert_eq!(scale_number(0.0), "0");
        assert_eq!(scale_number(500.0), "500");
        assert_eq!(scale_number(12.5), "12.5");
        assert_eq!(scale_number(1000.0), "1000");
    }

    #[test]
    fn scaled_values() {
        assert_eq!(scale_number(1500.0), "1.50K");
        assert_eq!(scale_number(2_500_000.0), "2.50M");
        assert_eq!(scale_number(3_000_000_000.0), "3.00G");
        assert_eq!(scale_number(4_000_000_000_000.0), "4.00T");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(scale_number(1125.0), "1.13K");
        assert_eq!(scale_number(2625.0), "2.63K");
        assert_eq!(scale_number(1_125_000.0), "1.13M");
        assert_eq!(scale_number(3_375_000_000.0), "3.38G");
    }

    #[test]
    fn exact_thresholds_fall_to_lower_bracket() {
        assert_eq!(scale_number(1_000_000.0), "1000.00K");
        assert_eq!(scale_number(1_000_000_000.0), "1000.00M");
        assert_eq!(scale_number(1_000_000_000_000.0), "1000.00G");
    }

    #[test]
    fn suffixed_output_has_two_decimals() {
        for n in [1001.0, 65_536.0, 7_340_032.0, 123_456_789_012.0, 9.9e15] {
            let s = scale_number(n);
            let digits = s.trim_end_matches(['K', 'M', 'G', 'T']);
            let (_, frac) = digits.split_once('.').expect("decimal point");
            assert_eq!(frac.len(), 2, "{s}");
        }
    }

    #[test]
    fn elapsed_clock() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(3723)), "1:02:03");
    }
}
