use thiserror::Error;

/// Failures of the external delivery call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Email delivery is not configured: missing {}", missing.join(", "))]
    NotConfigured { missing: Vec<&'static str> },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Delivery rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to build request: {message}")]
    Request { message: String },
}

impl From<reqwest::Error> for DeliveryError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            DeliveryError::Request {
                message: error.to_string(),
            }
        } else {
            DeliveryError::Network {
                message: error.to_string(),
            }
        }
    }
}

pub type DeliveryResult<T> = Result<T, DeliveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_lists_every_missing_credential() {
        let error = DeliveryError::NotConfigured {
            missing: vec!["service_id", "public_key"],
        };
        assert_eq!(
            error.to_string(),
            "Email delivery is not configured: missing service_id, public_key"
        );
    }

    #[test]
    fn test_rejected_display() {
        let error = DeliveryError::Rejected {
            status: 412,
            message: "Account not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Delivery rejected with status 412: Account not found"
        );
    }
}
