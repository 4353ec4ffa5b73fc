//! Validate-and-submit flow for the contact form.
//!
//! The flow is written against [`EmailDelivery`] and a plain dispatch
//! closure so it runs the same under the Dioxus runtime and in tests.

use crate::features::contact::form_validation::validate_submission;
use crate::features::contact::types::*;
use crate::services::delivery::EmailDelivery;
use crate::services::errors::ContactError;

/// What happened to one press of the send button
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight
    Busy,
    Delivered,
    /// Blank fields or a failed delivery; nothing is retried
    Failed(ContactError),
}

/// Runs one submission attempt against the delivery service.
///
/// Errors are always recomputed and dispatched first. Delivery is attempted
/// at most once and never retried. Fields are cleared by the reducer only
/// after the service confirms delivery.
pub async fn submit_contact_form<D, F>(state: &ContactState, delivery: &D, dispatch: F) -> SubmitOutcome
where
    D: EmailDelivery + ?Sized,
    F: Fn(ContactAction),
{
    if !state.can_submit() {
        return SubmitOutcome::Busy;
    }

    let submission = match validate_submission(&state.form) {
        Ok(submission) => {
            dispatch(ContactAction::SetErrors(FieldErrors::default()));
            submission
        }
        Err(errors) => {
            dispatch(ContactAction::SetErrors(errors.clone()));
            return SubmitOutcome::Failed(ContactError::Validation(errors));
        }
    };

    dispatch(ContactAction::SetSending(true));

    let result = delivery.send(&submission).await;
    let outcome = match result {
        Ok(()) => {
            dispatch(ContactAction::DeliverySucceeded(submission));
            SubmitOutcome::Delivered
        }
        Err(error) => {
            let error = ContactError::from(error);
            dispatch(ContactAction::DeliveryFailed(error.to_string()));
            SubmitOutcome::Failed(error)
        }
    };

    dispatch(ContactAction::SetSending(false));
    outcome
}
