//! Contact form wired to the EmailJS delivery client

use dioxus::prelude::*;

use crate::components::{
    display::LoadingIndicator,
    input::{FieldErrorFeedback, InputType, ValidatedInput},
};
use crate::features::contact::*;
use crate::services::delivery::EmailJsClient;
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct MessageFormProps {
    pub state: Signal<ContactState>,
    pub dispatch: EventHandler<ContactAction>,
}

fn input_type(field: ContactField) -> InputType {
    match field {
        ContactField::Name => InputType::Text,
        ContactField::Email => InputType::Email,
        ContactField::Message => InputType::Multiline(5),
    }
}

#[component]
pub fn MessageForm(props: MessageFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "contact-form",

            for field in ContactField::ALL {
                div {
                    key: "{field.placeholder()}",
                    class: "input-section",
                    ValidatedInput {
                        value: state().field_value(field).to_string(),
                        placeholder: field.placeholder().to_string(),
                        input_type: input_type(field),
                        input_class: state().field_class(field).to_string(),
                        input_style: state().field_style(field).to_string(),
                        disabled: state().is_sending,
                        on_change: move |value: String| {
                            dispatch.call(ContactAction::SetField(field, value));
                        }
                    }
                    FieldErrorFeedback {
                        message: state().field_error(field).to_string()
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "send-button",
                    disabled: !state().can_submit(),
                    onclick: move |_| {
                        let snapshot = state();
                        spawn(async move {
                            let client = EmailJsClient::from_global_config();
                            let outcome = submit_contact_form(&snapshot, &client, |action| {
                                dispatch.call(action);
                            })
                            .await;

                            match outcome {
                                SubmitOutcome::Delivered => {
                                    console_info!("[Contact] Message delivered");
                                }
                                SubmitOutcome::Busy => {
                                    console_info!("[Contact] Submission already in flight");
                                }
                                SubmitOutcome::Failed(error) if error.is_user_correctable() => {
                                    console_info!("[Contact] {}", error);
                                }
                                SubmitOutcome::Failed(error) => {
                                    console_warn!("[Contact] {}", error);
                                }
                            }
                        });
                    },
                    if state().is_sending {
                        LoadingIndicator { message: "Sending...".to_string(), inline: true }
                    } else {
                        "Send Message"
                        span {
                            class: "send-icon",
                            "➤"
                        }
                    }
                }
            }
        }
    }
}
