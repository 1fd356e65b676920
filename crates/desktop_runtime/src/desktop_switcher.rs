//! Virtual-desktop switcher selection model.
//!
//! Purely presentational: the desktop list comes from [`crate::config::DesktopConfig`] and no
//! window is ever assigned to a desktop.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopSwitcher {
    desktops: Vec<String>,
    active: usize,
    pub visible: bool,
}

impl DesktopSwitcher {
    pub fn new(desktops: Vec<String>) -> Self {
        Self {
            desktops,
            active: 0,
            visible: false,
        }
    }

    pub fn desktops(&self) -> &[String] {
        &self.desktops
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&str> {
        self.desktops.get(self.active).map(String::as_str)
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Selects desktop `index` and hides the switcher. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.desktops.len() {
            self.active = index;
            self.visible = false;
        }
    }

    /// Moves to the next desktop, wrapping around.
    pub fn next(&mut self) {
        if !self.desktops.is_empty() {
            self.active = (self.active + 1) % self.desktops.len();
        }
    }

    /// Moves to the previous desktop, wrapping around.
    pub fn prev(&mut self) {
        if !self.desktops.is_empty() {
            self.active = (self.active + self.desktops.len() - 1) % self.desktops.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher() -> DesktopSwitcher {
        DesktopSwitcher::new(vec!["Work".into(), "Play".into(), "Focus".into()])
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut s = switcher();
        s.toggle_visible();
        s.select(9);
        assert_eq!(s.active(), Some("Work"));
        assert!(s.visible);

        s.select(2);
        assert_eq!(s.active(), Some("Focus"));
        assert!(!s.visible);
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut s = switcher();
        s.prev();
        assert_eq!(s.active_index(), 2);
        s.next();
        s.next();
        assert_eq!(s.active(), Some("Play"));
    }

    #[test]
    fn empty_list_has_no_active_desktop() {
        let mut s = DesktopSwitcher::new(Vec::new());
        s.next();
        s.prev();
        assert_eq!(s.active(), None);
    }
}
