//! Number formatting for tables and cards (Vietnamese conventions)

/// Groups thousands with `.`, the decimal separator is `,`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.5, 1), "1.234,5");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    // "-0" after rounding reads oddly
    let sign = if grouped.chars().all(|c| c == '0' || c == '.')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Money in đồng, no fractional part: `1.234.567 ₫`
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", format_number_int(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(1234567.0), "1.234.567 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
        assert_eq!(format_vnd(1000.4), "1.000 ₫");
        assert_eq!(format_vnd(-25000.0), "-25.000 ₫");
    }

    #[test]
    fn test_format_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.56, 2), "1.234,56");
        assert_eq!(format_number_with_decimals(12.5, 1), "12,5");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_number_int(100000.0), "100.000");
        assert_eq!(format_number_int(12.0), "12");
    }
}
