use thiserror::Error;

use crate::features::contact::FieldErrors;
use crate::services::delivery::DeliveryError;

/// The two ways a contact submission can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// One or more required fields are blank; shown inline next to the fields
    #[error("Validation error: {} required field(s) missing", .0.count())]
    Validation(FieldErrors),

    /// The delivery service call failed; shown as a transient notification
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

impl ContactError {
    /// Validation errors are fixed by the user, delivery errors by trying later
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, ContactError::Validation(_))
    }
}
