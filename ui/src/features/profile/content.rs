/// A run of text in an intro line, optionally drawn in the highlight colour
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextSegment {
    pub text: &'static str,
    pub highlighted: bool,
}

const fn plain(text: &'static str) -> TextSegment {
    TextSegment {
        text,
        highlighted: false,
    }
}

const fn highlight(text: &'static str) -> TextSegment {
    TextSegment {
        text,
        highlighted: true,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SocialNetwork {
    LinkedIn,
    GitHub,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
}

impl SocialLink {
    pub fn label(&self) -> &'static str {
        match self.network {
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::GitHub => "GitHub",
        }
    }

    /// Brand colour used for the icon
    pub fn colour(&self) -> &'static str {
        match self.network {
            SocialNetwork::LinkedIn => "#0077B5",
            SocialNetwork::GitHub => "#333",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub image: &'static str,
    pub intro: &'static [&'static [TextSegment]],
    pub social_links: &'static [SocialLink],
}

pub const PROFILE: Profile = Profile {
    name: "Jiawei Liao",
    image: "images/Jiawei.png",
    intro: &[
        &[
            plain("Hey, I'm "),
            highlight("Jiawei Liao"),
            plain(", studying Software Engineering at Monash University."),
        ],
        &[
            plain("Intern at Tasty Fresh, building a "),
            highlight("machine learning"),
            plain(" POS system for micro-markets."),
        ],
        &[
            plain("I love "),
            highlight("exploring"),
            plain(" new technologies and applying them in projects like the ones below!"),
        ],
    ],
    social_links: &[
        SocialLink {
            network: SocialNetwork::LinkedIn,
            url: "https://www.linkedin.com/in/jiawei-liao-54a9a6300/",
        },
        SocialLink {
            network: SocialNetwork::GitHub,
            url: "https://github.com/Jiawei-Liao",
        },
    ],
};
