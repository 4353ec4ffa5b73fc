/// Guard for the profile picture glint: one animation at a time
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct GlintState {
    pub animating: bool,
}

impl GlintState {
    /// Starts the animation unless one is already running
    pub fn try_start(&mut self) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        true
    }

    pub fn finish(&mut self) {
        self.animating = false;
    }

    pub fn class(&self) -> &'static str {
        if self.animating {
            "glint-border animate"
        } else {
            "glint-border"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_while_animating_is_refused() {
        let mut glint = GlintState::default();
        assert!(glint.try_start());
        assert!(!glint.try_start());

        glint.finish();
        assert!(glint.try_start());
    }

    #[test]
    fn test_class_tracks_animation() {
        let mut glint = GlintState::default();
        assert_eq!(glint.class(), "glint-border");
        glint.try_start();
        assert_eq!(glint.class(), "glint-border animate");
    }
}
