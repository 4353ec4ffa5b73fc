use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    /// Empty when the field has no error
    pub message: String,
}

/// Helper text under a form field
#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    if props.message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "validation-feedback invalid",
            role: "alert",
            style: "color: #ef4444; font-size: 0.75rem; margin: 4px 14px 0;",
            "{props.message}"
        }
    }
}
