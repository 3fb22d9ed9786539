//! Mobile navigation menu state.
//!
//! The header owns exactly one [`MenuState`] for its lifetime. Nothing else
//! reads or writes it.

/// Open/closed flag for the small-viewport navigation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Flip between `Closed` and `Open` (menu button activation).
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Collapse the menu. Called when a link inside it is activated.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value for the menu button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Screen reader label for the menu button.
    pub fn button_label(self) -> &'static str {
        if self.is_open() {
            "Close main menu"
        } else {
            "Open main menu"
        }
    }
}
