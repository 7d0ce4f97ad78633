//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status lines plus the re-rendered checklist after every change.
    #[default]
    Normal,
    /// Status lines only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl From<crate::config::OutputMode> for OutputMode {
    fn from(config_mode: crate::config::OutputMode) -> Self {
        match config_mode {
            crate::config::OutputMode::Normal => Self::Normal,
            crate::config::OutputMode::Quiet => Self::Quiet,
            crate::config::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode redraws the checklist after a change.
    pub fn shows_listing(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_shows_everything() {
        assert!(OutputMode::Normal.shows_listing());
        assert!(OutputMode::Normal.shows_status());
    }

    #[test]
    fn quiet_hides_listing_only() {
        assert!(!OutputMode::Quiet.shows_listing());
        assert!(OutputMode::Quiet.shows_status());
    }

    #[test]
    fn silent_hides_status() {
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn converts_from_config_mode() {
        assert_eq!(
            OutputMode::from(crate::config::OutputMode::Silent),
            OutputMode::Silent
        );
    }
}
