//! Parsing of form inputs into DTO fields.
//!
//! Required fields are enforced by the browser (`required` on the input);
//! these helpers only reject values the browser lets through.

/// Create or edit an existing record
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<T> {
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(record) => Some(record),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Trimmed text, `None` when blank
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn required(label: &str, raw: &str) -> Result<String, String> {
    optional(raw).ok_or_else(|| format!("{} không được để trống.", label))
}

/// Non-negative amount; blank counts as zero
pub fn parse_amount(label: &str, raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(format!("{} phải là số không âm.", label)),
    }
}

/// Whole number, optionally allowed to be negative
pub fn parse_quantity(label: &str, raw: &str, allow_negative: bool) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i64>() {
        Ok(value) if allow_negative || value >= 0 => Ok(value),
        _ => Err(format!("{} phải là số nguyên hợp lệ.", label)),
    }
}

/// Positive whole number
pub fn parse_positive(label: &str, raw: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(format!("{} phải lớn hơn 0.", label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_and_required() {
        assert_eq!(optional("  "), None);
        assert_eq!(optional(" Trà ").as_deref(), Some("Trà"));
        assert_eq!(required("Tên", "").unwrap_err(), "Tên không được để trống.");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("Giá", "25000"), Ok(25000.0));
        assert_eq!(parse_amount("Giá", "12,5"), Ok(12.5));
        assert_eq!(parse_amount("Giá", ""), Ok(0.0));
        assert!(parse_amount("Giá", "-1").is_err());
        assert!(parse_amount("Giá", "abc").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("Tồn kho", "12", false), Ok(12));
        assert!(parse_quantity("Tồn kho", "-3", false).is_err());
        assert_eq!(parse_quantity("Số lượng", "-3", true), Ok(-3));
        assert!(parse_quantity("Tồn kho", "1.5", false).is_err());
        assert!(parse_positive("Số lượng", "0").is_err());
        assert_eq!(parse_positive("Số lượng", "4"), Ok(4));
    }

    #[test]
    fn test_form_mode() {
        assert_eq!(FormMode::<u8>::Create.record(), None);
        assert!(FormMode::Edit(3).is_edit());
        assert_eq!(FormMode::Edit(3).record(), Some(&3));
    }
}
