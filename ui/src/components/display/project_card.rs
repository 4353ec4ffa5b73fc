use dioxus::prelude::*;

use crate::features::projects::Project;
use crate::utils::open_in_new_tab;

#[derive(Props, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div {
            class: "project-card",
            role: "link",
            tabindex: "0",
            onclick: move |_| open_in_new_tab(project.link),
            div {
                class: "project-image",
                style: "background-image: url({project.image});",
            }
            div {
                class: "project-body",
                h3 {
                    class: "project-name",
                    "{project.name}"
                }
                p {
                    class: "project-description",
                    "{project.description}"
                }
            }
        }
    }
}
