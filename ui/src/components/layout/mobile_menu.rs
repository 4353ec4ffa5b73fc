use dioxus::prelude::*;

use crate::features::navigation::Section;

#[derive(Props, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub open: bool,
    /// Top edge, directly under the navigation bar
    pub top: u32,
    pub on_navigate: EventHandler<Section>,
}

/// Dropdown of section links; kept mounted so it can slide open and closed
#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        nav {
            id: "mobile-menu",
            class: if props.open { "mobile-menu open" } else { "mobile-menu" },
            style: "top: {props.top}px;",
            "aria-hidden": "{!props.open}",
            div {
                class: "mobile-menu-items",
                for (index, section) in Section::ALL.into_iter().enumerate() {
                    div {
                        key: "{section.id()}",
                        class: "mobile-menu-entry",
                        if index > 0 {
                            hr { class: "mobile-menu-divider" }
                        }
                        button {
                            class: "mobile-menu-button",
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                }
            }
        }
    }
}
