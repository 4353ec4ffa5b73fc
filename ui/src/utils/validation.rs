use crate::features::contact::{ContactField, ContactState, NotificationSeverity};

pub fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

pub fn field_style(has_error: bool) -> &'static str {
    if has_error {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    } else {
        ""
    }
}

pub fn notification_class(severity: NotificationSeverity) -> &'static str {
    match severity {
        NotificationSeverity::Success => "notification-banner notification-success",
        NotificationSeverity::Error => "notification-banner notification-error",
    }
}

impl ContactState {
    pub fn field_class(&self, field: ContactField) -> &'static str {
        field_class(self.errors.has_error(field))
    }

    pub fn field_style(&self, field: ContactField) -> &'static str {
        field_style(self.errors.has_error(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact::ContactAction;

    #[test]
    fn test_field_class_follows_error() {
        let mut state = ContactState::default();
        state.errors.set(ContactField::Name, ContactField::Name.required_message());

        assert_eq!(state.field_class(ContactField::Name), "input-field input-invalid");
        assert_eq!(state.field_class(ContactField::Email), "input-field");

        state.reduce_in_place(ContactAction::SetField(ContactField::Name, "A".to_string()));
        assert_eq!(state.field_class(ContactField::Name), "input-field");
        assert_eq!(state.field_style(ContactField::Name), "");
    }
}
