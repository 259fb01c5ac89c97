#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_link_click_forces_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");

        let opened = menu.toggled();
        assert!(opened.is_open());
        assert_eq!(opened.aria_expanded(), "true");

        assert!(!opened.toggled().is_open());
        assert_eq!(MenuState::closed(), MenuState::default());
    }
}
