//! Field checks shared by the entity constructors.

use chrono::NaiveDate;

use crate::errors::CoreError;

pub(crate) fn text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn amount(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::validation(format!(
            "{field} must be a non-negative amount, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn reference(field: &str, id: i64) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::validation(format!(
            "{field} must reference a persisted record, got {id}"
        )));
    }
    Ok(())
}

pub(crate) fn date_order(
    start_field: &str,
    start: NaiveDate,
    end_field: &str,
    end: NaiveDate,
) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::validation(format!(
            "{end_field} ({end}) is before {start_field} ({start})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_rejects_negative_and_nan() {
        assert!(amount("amount", -0.01).is_err());
        assert!(amount("amount", f64::NAN).is_err());
        assert!(amount("amount", f64::INFINITY).is_err());
        assert!(amount("amount", 0.0).is_ok());
    }

    #[test]
    fn text_rejects_blank() {
        assert!(text("title", "   ").is_err());
        assert!(text("title", "Logo design").is_ok());
    }

    #[test]
    fn reference_requires_positive_id() {
        assert!(reference("offer_id", 0).is_err());
        assert!(reference("offer_id", 12).is_ok());
    }
}
