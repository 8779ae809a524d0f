// header, menu and in-page scrolling

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderShadow {
    Resting,
    Raised,
}

impl HeaderShadow {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderShadow::Raised
        } else {
            HeaderShadow::Resting
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderShadow::Resting => "0 2px 15px rgba(0,0,0,0.1)",
            HeaderShadow::Raised => "0 5px 20px rgba(0,0,0,0.1)",
        }
    }
}

// the mobile menu: toggle button and link panel share one flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

// the element id for a same-page anchor, or None if the click should not be
// turned into a scroll.  a bare "#" is swallowed without scrolling
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn is_same_page_anchor(href: &str) -> bool {
    href.starts_with('#')
}

// document offset of the target, minus the fixed header
pub fn scroll_destination(rect_top: f64, page_offset: f64, header_height: f64) -> f64 {
    rect_top + page_offset - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_strengthens_past_threshold() {
        assert_eq!(HeaderShadow::for_offset(0.0, 50.0), HeaderShadow::Resting);
        assert_eq!(HeaderShadow::for_offset(50.0, 50.0), HeaderShadow::Resting);
        assert_eq!(HeaderShadow::for_offset(50.5, 50.0), HeaderShadow::Raised);
        assert_ne!(HeaderShadow::Raised.box_shadow(), HeaderShadow::Resting.box_shadow());
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();

        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#gallery"), Some("gallery"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
        assert!(is_same_page_anchor("#"));
        assert!(!is_same_page_anchor("https://wa.me/123"));
    }

    #[test]
    fn destination_accounts_for_header() {
        assert_eq!(scroll_destination(300.0, 1200.0, 80.0), 1420.0);
        assert_eq!(scroll_destination(-200.0, 1200.0, 80.0), 920.0);
    }
}
