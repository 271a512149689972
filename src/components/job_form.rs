//! Add-job form validation
//!
//! Validates the form draft before it reaches the store.

use crate::types::JobForm;
use thiserror::Error;

/// Maximum accepted length for free-text fields, in bytes
pub const MAX_FIELD_LEN: usize = 100;

/// Validation errors for the add-job form
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobFormError {
    #[error("Position is required (max 100 characters)")]
    InvalidPosition,

    #[error("Company is required (max 100 characters)")]
    InvalidCompany,

    #[error("Location is required (max 100 characters)")]
    InvalidLocation,
}

impl JobForm {
    /// Validate the draft
    pub fn validate(&self) -> Result<(), JobFormError> {
        check_field(&self.position, JobFormError::InvalidPosition)?;
        check_field(&self.company, JobFormError::InvalidCompany)?;
        check_field(&self.location, JobFormError::InvalidLocation)?;
        Ok(())
    }
}

fn check_field(value: &str, err: JobFormError) -> Result<(), JobFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_FIELD_LEN {
        return Err(err);
    }
    Ok(())
}
