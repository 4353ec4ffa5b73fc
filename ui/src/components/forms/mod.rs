pub mod contact_form;

pub use contact_form::MessageForm;
