use dioxus::prelude::*;

use crate::features::contact::{NotificationSeverity, NotificationState};
use crate::utils::notification_class;

#[derive(Props, PartialEq, Clone)]
pub struct NotificationBannerProps {
    pub notification: NotificationState,
    pub on_dismiss: EventHandler<()>,
}

/// Transient outcome message anchored to the top centre of the page
#[component]
pub fn NotificationBanner(props: NotificationBannerProps) -> Element {
    let notification = props.notification;
    if !notification.visible {
        return rsx! {};
    }

    let icon = match notification.severity {
        NotificationSeverity::Success => "✓",
        NotificationSeverity::Error => "⚠",
    };

    rsx! {
        div {
            class: "notification-anchor",
            div {
                class: notification_class(notification.severity),
                role: "alert",
                "data-severity": notification.severity.as_str(),
                span {
                    class: "notification-icon",
                    "{icon}"
                }
                span {
                    class: "notification-text",
                    "{notification.text}"
                }
                button {
                    class: "notification-close",
                    "aria-label": "Close",
                    onclick: move |_| props.on_dismiss.call(()),
                    "✕"
                }
            }
        }
    }
}
