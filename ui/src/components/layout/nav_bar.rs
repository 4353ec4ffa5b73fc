use dioxus::prelude::*;

use crate::features::navigation::{NavState, Section};

#[derive(Props, PartialEq, Clone)]
pub struct NavBarProps {
    pub nav: NavState,
    pub height: u32,
    /// Shown instead of the section links on mobile
    pub owner_name: String,
    pub on_navigate: EventHandler<Section>,
    pub on_toggle_menu: EventHandler<()>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let on_navigate = props.on_navigate;
    let on_toggle_menu = props.on_toggle_menu;

    rsx! {
        header {
            class: "nav-bar",
            style: "height: {props.height}px;",

            if props.nav.is_mobile {
                div {
                    class: "nav-group nav-left",
                    button {
                        class: "nav-button",
                        onclick: move |_| on_navigate.call(Section::About),
                        "{props.owner_name}"
                    }
                }
                div { class: "nav-spacer" }
                div {
                    class: "nav-group nav-right",
                    button {
                        class: "nav-button menu-toggle",
                        "aria-expanded": "{props.nav.menu_open}",
                        "aria-controls": "mobile-menu",
                        onclick: move |_| on_toggle_menu.call(()),
                        if props.nav.menu_open { "✕" } else { "☰" }
                    }
                }
            } else {
                div {
                    class: "nav-group nav-left",
                    for section in [Section::About, Section::Projects] {
                        button {
                            key: "{section.id()}",
                            class: "nav-button",
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                }
                div { class: "nav-spacer" }
                div {
                    class: "nav-group nav-right",
                    button {
                        class: "nav-button",
                        onclick: move |_| on_navigate.call(Section::Contact),
                        "{Section::Contact.label()}"
                    }
                }
            }
        }
    }
}
