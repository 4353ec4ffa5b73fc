// Client-side email delivery for the contact form
//
// The page has no backend of its own, so contact messages go straight from
// the browser to the EmailJS REST API.

pub mod emailjs_client;
pub mod errors;
pub mod traits;

pub use emailjs_client::{EmailJsClient, EmailJsRequest};
pub use errors::{DeliveryError, DeliveryResult};
pub use traits::EmailDelivery;
