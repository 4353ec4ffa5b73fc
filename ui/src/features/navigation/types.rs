use crate::services::config::NavigationConfig;

/// Page sections reachable from the navigation bar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    /// DOM id of the section element
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Projects => "Projects",
            Section::Contact => "Contact Me",
        }
    }

    /// Pixels added to the section top when scrolling to it, leaving room
    /// for the fixed bar
    pub fn scroll_offset(&self) -> f64 {
        match self {
            Section::About => -100.0,
            Section::Projects | Section::Contact => -70.0,
        }
    }

    /// Absolute scroll target for a section whose top is `section_top`
    /// relative to the viewport while the page is at `scroll_y`
    pub fn scroll_target(&self, section_top: f64, scroll_y: f64) -> f64 {
        (scroll_y + section_top + self.scroll_offset()).max(0.0)
    }
}

#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct NavState {
    pub scrolled: bool,
    pub is_mobile: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn menu_height(&self, config: &NavigationConfig) -> u32 {
        if self.scrolled || self.is_mobile {
            config.compact_height_px
        } else {
            config.expanded_height_px
        }
    }

    /// Returns true when the scrolled flag actually changed
    pub fn update_scroll(&mut self, scroll_y: f64, config: &NavigationConfig) -> bool {
        let scrolled = scroll_y > config.scroll_threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// The dropdown only exists on mobile, so leaving mobile closes it
    pub fn set_mobile(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
        if !is_mobile {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_height() {
        let config = NavigationConfig::default();
        let mut nav = NavState::default();
        assert_eq!(nav.menu_height(&config), 100);

        nav.scrolled = true;
        assert_eq!(nav.menu_height(&config), 70);

        nav.scrolled = false;
        nav.is_mobile = true;
        assert_eq!(nav.menu_height(&config), 70);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let config = NavigationConfig::default();
        let mut nav = NavState::default();

        assert!(!nav.update_scroll(100.0, &config));
        assert!(!nav.scrolled);

        assert!(nav.update_scroll(100.5, &config));
        assert!(nav.scrolled);

        assert!(!nav.update_scroll(400.0, &config));
        assert!(nav.update_scroll(0.0, &config));
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_leaving_mobile_closes_menu() {
        let mut nav = NavState::default();
        nav.set_mobile(true);
        nav.toggle_menu();
        assert!(nav.menu_open);

        nav.set_mobile(false);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_section_scroll_targets() {
        assert_eq!(Section::About.scroll_target(300.0, 0.0), 200.0);
        assert_eq!(Section::Projects.scroll_target(300.0, 1000.0), 1230.0);
        assert_eq!(Section::Contact.scroll_target(20.0, 0.0), 0.0);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["about", "projects", "contact"]);
    }
}
