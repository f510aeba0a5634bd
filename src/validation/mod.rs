//! Boundary checks shared by the typed scoring inputs.
//!
//! Every input type is built through one of these helpers, so a constructed
//! input is always in range and the scoring components never see a bad value.

pub mod error;


pub use error::ValidationError;

pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, ValidationError> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::BelowMinimum {
            field,
            value: value.to_string(),
            min: "0".to_string(),
        });
    }
    Ok(value)
}

pub(crate) fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    let value = require_finite(field, value)?;
    if value < min {
        return Err(ValidationError::BelowMinimum {
            field,
            value: value.to_string(),
            min: min.to_string(),
        });
    }
    if value > max {
        return Err(ValidationError::AboveMaximum {
            field,
            value: value.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

pub(crate) fn require_int_in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if value < min {
        return Err(ValidationError::BelowMinimum {
            field,
            value: value.to_string(),
            min: min.to_string(),
        });
    }
    if value > max {
        return Err(ValidationError::AboveMaximum {
            field,
            value: value.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}
