use crate::features::contact::types::*;

/// True when the value has no characters other than whitespace
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Recomputes every field error from scratch
pub fn validate_fields(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in ContactField::ALL {
        if is_blank(form.value(field)) {
            errors.set(field, field.required_message());
        }
    }
    errors
}

/// Validates the form and builds the payload for delivery.
///
/// The payload carries the values exactly as typed; trimming only decides
/// whether a field counts as filled in.
pub fn validate_submission(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let errors = validate_fields(form);
    if errors.is_empty() {
        Ok(form.to_submission())
    } else {
        Err(errors)
    }
}
