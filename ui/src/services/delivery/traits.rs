//! Delivery collaborator abstraction

use async_trait::async_trait;

use super::errors::DeliveryError;
use crate::features::contact::ContactSubmission;

/// Sends a contact submission to whatever actually delivers the email.
///
/// Futures are not `Send` because the browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait EmailDelivery {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DeliveryError>;
}
