use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::features::navigation::Section;
use crate::features::profile::{GlintState, PROFILE};

#[derive(Props, PartialEq, Clone)]
pub struct AboutSectionProps {
    pub glint_duration_ms: u32,
}

#[component]
pub fn AboutSection(props: AboutSectionProps) -> Element {
    let mut glint = use_signal(GlintState::default);
    let duration = props.glint_duration_ms;

    rsx! {
        section {
            id: Section::About.id(),
            class: "page-section about-section",

            div {
                class: "about-content",

                div {
                    class: glint().class(),
                    onmouseenter: move |_| {
                        if glint.with_mut(|g| g.try_start()) {
                            spawn(async move {
                                TimeoutFuture::new(duration).await;
                                glint.with_mut(|g| g.finish());
                            });
                        }
                    },
                    div {
                        class: "circular-image",
                        img {
                            src: PROFILE.image,
                            alt: PROFILE.name
                        }
                    }
                }

                div {
                    class: "about-text",
                    for (index, line) in PROFILE.intro.iter().enumerate() {
                        h2 {
                            key: "{index}",
                            class: "about-line",
                            for segment in line.iter() {
                                if segment.highlighted {
                                    span {
                                        class: "highlight",
                                        "{segment.text}"
                                    }
                                } else {
                                    "{segment.text}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
