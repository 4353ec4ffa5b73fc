use dioxus::prelude::*;

use crate::components::display::ProjectCard;
use crate::features::navigation::Section;
use crate::features::projects::PROJECTS;

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section {
            id: Section::Projects.id(),
            class: "page-section projects-section",

            h2 {
                class: "section-title",
                "Projects"
            }

            div {
                class: "project-grid",
                for project in PROJECTS.iter().copied() {
                    ProjectCard {
                        key: "{project.name}",
                        project: project
                    }
                }
            }
        }
    }
}
