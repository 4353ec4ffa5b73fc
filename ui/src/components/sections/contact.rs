use dioxus::prelude::*;

use crate::components::forms::MessageForm;
use crate::features::contact::{ContactAction, ContactState};
use crate::features::navigation::Section;
use crate::features::profile::{SocialNetwork, PROFILE};
use crate::utils::open_in_new_tab;

#[derive(Props, PartialEq, Clone)]
pub struct ContactSectionProps {
    pub state: Signal<ContactState>,
    pub dispatch: EventHandler<ContactAction>,
}

#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    rsx! {
        section {
            id: Section::Contact.id(),
            class: "page-section contact-section",

            h2 {
                class: "section-title",
                "Contact Me"
            }

            div {
                class: "contact-layout",

                div {
                    class: "social-links",
                    for link in PROFILE.social_links.iter().copied() {
                        button {
                            key: "{link.label()}",
                            class: "social-button",
                            title: link.label(),
                            style: "color: {link.colour()};",
                            onclick: move |_| open_in_new_tab(link.url),
                            {match link.network {
                                SocialNetwork::LinkedIn => rsx! { span { class: "social-icon linkedin", "in" } },
                                SocialNetwork::GitHub => rsx! { span { class: "social-icon github", "GH" } },
                            }}
                        }
                    }
                }

                MessageForm {
                    state: props.state,
                    dispatch: props.dispatch
                }
            }
        }
    }
}
