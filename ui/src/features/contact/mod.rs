//! Contact form controller
//!
//! Holds the three text fields and their errors, validates on submit, hands
//! valid submissions to the delivery service and reports the outcome through
//! a transient notification.

pub mod controller;
pub mod form_validation;
pub mod types;

pub use controller::{submit_contact_form, SubmitOutcome};
pub use form_validation::*;
pub use types::*;
