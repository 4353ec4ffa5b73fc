use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
    /// Render inside a button instead of as its own block
    #[props(default)]
    pub inline: bool,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    if props.inline {
        rsx! {
            span {
                class: "loading-indicator inline",
                "⏳ {props.message}"
            }
        }
    } else {
        rsx! {
            div {
                class: "loading-indicator",
                "⏳ {props.message}"
            }
        }
    }
}
