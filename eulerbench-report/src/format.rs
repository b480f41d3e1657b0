//! Timing Formatting

/// Width of a formatted timing column
pub const TIMING_WIDTH: usize = 20;

/// Format seconds as `X XXX XXX.YYYYYY`, right-aligned to `TIMING_WIDTH`
///
/// # Examples
///
/// ```
/// # use eulerbench_report::format_seconds;
/// assert_eq!(format_seconds(1234.5), "        1 234.500000");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    let fixed = format!("{:.6}", seconds);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "000000"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    format!("{:>width$}", format!("{sign}{grouped}.{fraction}"), width = TIMING_WIDTH)
}
