//! Field-level checks shared by the entity modules.

use crate::errors::ModelError;
use crate::patch::Patch;

/// Required text column: must be non-blank after trimming.
pub fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Patched text column: absent is fine, `null` is rejected because every
/// column is NOT NULL, and a supplied value must satisfy [`require_text`].
pub fn check_patch_text(field: &str, value: &Patch<String>) -> Result<(), ModelError> {
    match value {
        Patch::Missing => Ok(()),
        Patch::Null => Err(ModelError::Validation(format!("{field} cannot be null"))),
        Patch::Value(v) => require_text(field, v),
    }
}

/// Rejects a patch in which no field was supplied.
pub fn require_any(fields: &[(&str, &Patch<String>)]) -> Result<(), ModelError> {
    if fields.iter().all(|(_, p)| p.is_missing()) {
        return Err(ModelError::Validation("No fields to update".into()));
    }
    for (name, p) in fields {
        check_patch_text(name, p)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("food_name", "  ").is_err());
        assert!(require_text("food_name", "Pizza").is_ok());
    }

    #[test]
    fn empty_patch_is_rejected() {
        let a: Patch<String> = Patch::Missing;
        let err = require_any(&[("food_name", &a)]).unwrap_err();
        assert_eq!(err.to_string(), "validation error: No fields to update");
    }

    #[test]
    fn null_patch_field_is_rejected() {
        let a: Patch<String> = Patch::Null;
        let err = require_any(&[("payment_method", &a)]).unwrap_err();
        assert!(err.to_string().contains("payment_method cannot be null"));
    }
}
