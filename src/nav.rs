/// A top-bar link to an in-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Element id of the target section, without the `#`.
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Skills", anchor: "skills" },
    NavItem { label: "Experience", anchor: "experience" },
    NavItem { label: "Contact", anchor: "contact" },
];

/// Scroll offset past which the bar gets its solid background.
pub const SCROLLED_AFTER: f64 = 50.0;

/// Distance from the viewport top used to pick the current section.
pub const MARKER_LINE: f64 = 100.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// Bounding rect of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub anchor: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// First section spanning the marker line, in document order.
pub fn active_section<'a>(sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.top <= MARKER_LINE && s.bottom >= MARKER_LINE)
        .map(|s| s.anchor)
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always closes the menu.
    pub fn navigate(&mut self) {
        self.open = false;
    }
}
