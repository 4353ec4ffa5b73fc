/// One card in the project gallery
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    /// Path under the site's public directory
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Interview Helper",
        description: "Simulates an online interview environment, transcribing answers to generate actionable feedback for improvement.",
        image: "images/InterviewHelper.png",
        link: "https://interview-helper-alpha.vercel.app/",
    },
    Project {
        name: "Polymation",
        description: "Polymation automates character skeleton and animation rigging using machine learning.",
        image: "images/Polymation.png",
        link: "https://github.com/Monash-FIT3170/Team7_AI_Modelling",
    },
    Project {
        name: "MyJourney",
        description: "MyJourney helps record your everyday journeys with images, location, weather, and more for easy diary keeping.",
        image: "images/MyJourney.png",
        link: "https://github.com/Jiawei-Liao/MyJourney",
    },
    Project {
        name: "Klee's Bizarre Adventure",
        description: "My first unity rogue-like game. Shoot slimes and upgrade yourself.",
        image: "images/KleesBizarreAdventure.png",
        link: "https://github.com/Jiawei-Liao/Klees-Bizarre-Adventure",
    },
    // TODO: add the betting arbitrage calculator once it has a screenshot
    Project {
        name: "ChemQuest",
        description: "ChemQuest is a story board game that helps students learn chemistry by using chemical reactions to complete the narrative.",
        image: "images/ChemQuest.png",
        link: "https://github.com/Jiawei-Liao/ChemQuest",
    },
    Project {
        name: "Dehya Clicker",
        description: "Let Dehya try to beat up a hydro slime.",
        image: "images/DehyaClicker.png",
        link: "https://jiawei-liao.github.io/Dehya-Clicker/",
    },
    Project {
        name: "PZ Book Checklist",
        description: "Keep track of the skill books you collect in Project Zomboid.",
        image: "images/PZBookChecklist.png",
        link: "https://jiawei-liao.github.io/PZ-Skill-Book-Checklist/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_complete() {
        assert_eq!(PROJECTS.len(), 7);
        for project in PROJECTS {
            assert!(!project.name.is_empty());
            assert!(!project.description.is_empty());
            assert!(project.image.starts_with("images/"));
            assert!(project.link.starts_with("https://"), "{}", project.name);
        }
    }

    #[test]
    fn test_project_names_are_unique() {
        let names: HashSet<_> = PROJECTS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PROJECTS.len());
    }
}
