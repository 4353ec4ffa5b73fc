// Core types for the contact form - no dioxus imports needed here
use serde::Serialize;

pub const SUCCESS_NOTIFICATION: &str = "Message sent successfully!";
pub const ERROR_NOTIFICATION: &str = "An error occurred, please try again later.";

/// The three inputs of the contact form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Fixed message shown under the field when it is left blank
    pub fn required_message(&self) -> &'static str {
        match self {
            ContactField::Name => "Name is required",
            ContactField::Email => "Email is required",
            ContactField::Message => "Message is required",
        }
    }
}

/// Payload handed to the delivery service, serialized as the template params
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

// Form state structs
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Clears the fields that still hold what was sent; later edits stay
    pub fn clear_sent(&mut self, sent: &ContactSubmission) {
        for field in ContactField::ALL {
            if self.value(field) == sent.value(field) {
                self.set(field, String::new());
            }
        }
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Per-field error text; an empty string means the field has no error
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, message: &str) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = message.to_string();
    }

    pub fn clear(&mut self, field: ContactField) {
        self.set(field, "");
    }

    pub fn has_error(&self, field: ContactField) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| !self.has_error(*field))
    }

    pub fn count(&self) -> usize {
        ContactField::ALL
            .iter()
            .filter(|field| self.has_error(**field))
            .count()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NotificationSeverity {
    #[default]
    Success,
    Error,
}

impl NotificationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationSeverity::Success => "success",
            NotificationSeverity::Error => "error",
        }
    }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct NotificationState {
    pub visible: bool,
    pub text: String,
    pub severity: NotificationSeverity,
    /// Bumped on every show so a stale auto-hide timer can be ignored
    pub generation: u64,
}

impl NotificationState {
    fn show(&mut self, text: &str, severity: NotificationSeverity) {
        self.visible = true;
        self.text = text.to_string();
        self.severity = severity;
        self.generation = self.generation.wrapping_add(1);
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum ContactAction {
    SetField(ContactField, String),
    SetErrors(FieldErrors),
    SetSending(bool),
    /// Carries what was sent so edits made during the send survive
    DeliverySucceeded(ContactSubmission),
    DeliveryFailed(String),
    DismissNotification,
    ExpireNotification(u64),
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub is_sending: bool,
    pub notification: NotificationState,
    /// Reason of the most recent delivery failure, kept for diagnostics only
    pub last_failure: Option<String>,
}

impl ContactState {
    /// Reduces the state based on an action
    pub fn reduce(mut self, action: ContactAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// In-place reduction so the owning Signal keeps its subscribers
    pub fn reduce_in_place(&mut self, action: ContactAction) {
        match action {
            ContactAction::SetField(field, value) => {
                self.form.set(field, value);
                self.errors.clear(field);
            }
            ContactAction::SetErrors(errors) => {
                self.errors = errors;
            }
            ContactAction::SetSending(sending) => {
                self.is_sending = sending;
            }
            ContactAction::DeliverySucceeded(sent) => {
                self.form.clear_sent(&sent);
                self.last_failure = None;
                self.notification
                    .show(SUCCESS_NOTIFICATION, NotificationSeverity::Success);
            }
            ContactAction::DeliveryFailed(reason) => {
                self.last_failure = Some(reason);
                self.notification
                    .show(ERROR_NOTIFICATION, NotificationSeverity::Error);
            }
            ContactAction::DismissNotification => {
                self.notification.visible = false;
            }
            ContactAction::ExpireNotification(generation) => {
                if self.notification.generation == generation {
                    self.notification.visible = false;
                }
            }
        }
    }

    pub fn field_value(&self, field: ContactField) -> &str {
        self.form.value(field)
    }

    pub fn field_error(&self, field: ContactField) -> &str {
        self.errors.get(field)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_all_errors() -> ContactState {
        let mut state = ContactState::default();
        for field in ContactField::ALL {
            state.errors.set(field, field.required_message());
        }
        state
    }

    fn sent() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "hello".to_string(),
        }
    }

    fn state_holding(submission: &ContactSubmission) -> ContactState {
        let mut state = ContactState::default();
        for field in ContactField::ALL {
            state.form.set(field, submission.value(field).to_string());
        }
        state
    }

    #[test]
    fn test_editing_clears_only_that_field_error() {
        for edited in ContactField::ALL {
            let state = state_with_all_errors()
                .reduce(ContactAction::SetField(edited, "a".to_string()));

            for field in ContactField::ALL {
                if field == edited {
                    assert_eq!(state.errors.get(field), "", "edited {:?}", edited);
                    assert_eq!(state.form.value(field), "a");
                } else {
                    assert_eq!(state.errors.get(field), field.required_message(), "edited {:?}", edited);
                }
            }
        }
    }

    #[test]
    fn test_delivery_succeeded_clears_form_and_shows_success() {
        let state = state_holding(&sent()).reduce(ContactAction::DeliverySucceeded(sent()));

        assert_eq!(state.form, ContactForm::default());
        assert!(state.notification.visible);
        assert_eq!(state.notification.text, SUCCESS_NOTIFICATION);
        assert_eq!(state.notification.severity, NotificationSeverity::Success);
    }

    #[test]
    fn test_delivery_succeeded_keeps_edits_made_while_sending() {
        let mut state = state_holding(&sent());
        state.form.message = "a follow-up".to_string();

        let state = state.reduce(ContactAction::DeliverySucceeded(sent()));

        assert_eq!(state.form.name, "");
        assert_eq!(state.form.email, "");
        assert_eq!(state.form.message, "a follow-up");
    }

    #[test]
    fn test_delivery_failed_keeps_form_and_shows_error() {
        let mut state = ContactState::default();
        state.form.name = "Ada".to_string();
        state.form.message = "hello".to_string();

        let state = state.reduce(ContactAction::DeliveryFailed("timeout".to_string()));

        assert_eq!(state.form.name, "Ada");
        assert_eq!(state.form.message, "hello");
        assert!(state.notification.visible);
        assert_eq!(state.notification.text, ERROR_NOTIFICATION);
        assert_eq!(state.notification.severity, NotificationSeverity::Error);
        assert_eq!(state.last_failure.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let state = ContactState::default().reduce(ContactAction::DeliverySucceeded(sent()));
        let first = state.notification.generation;
        let state = state.reduce(ContactAction::DeliveryFailed("boom".to_string()));
        let second = state.notification.generation;
        assert_ne!(first, second);

        let state = state.reduce(ContactAction::ExpireNotification(first));
        assert!(state.notification.visible);

        let state = state.reduce(ContactAction::ExpireNotification(second));
        assert!(!state.notification.visible);
    }

    #[test]
    fn test_dismiss_hides_notification() {
        let state = ContactState::default()
            .reduce(ContactAction::DeliverySucceeded(sent()))
            .reduce(ContactAction::DismissNotification);
        assert!(!state.notification.visible);
        // Text is kept so the banner can fade out with its content
        assert_eq!(state.notification.text, SUCCESS_NOTIFICATION);
    }

    #[test]
    fn test_field_errors_count() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());
        errors.set(ContactField::Message, ContactField::Message.required_message());
        assert_eq!(errors.count(), 1);
        assert!(!errors.is_empty());
    }
}
