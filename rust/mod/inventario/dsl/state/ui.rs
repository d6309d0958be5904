//! Page chrome — stored under `ui/`.

use flux_derive::state;
use serde::{Deserialize, Serialize};

/// Viewport width at and above which the desktop layout applies.
pub const DESKTOP_MIN_WIDTH: u32 = 768;
/// Scroll offset below which the navbar never hides.
pub const NAVBAR_HIDE_AFTER: f64 = 100.0;

/// User-facing alerts, oldest first.
#[state("ui/notices")]
#[derive(Default, Serialize, Deserialize)]
pub struct Notices {
    pub items: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl Notices {
    pub fn last_text(&self) -> Option<&str> {
        self.items.last().map(|n| n.text.as_str())
    }
}

/// Submit button of a server-posted form.
#[state("ui/submit")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButton {
    pub disabled: bool,
    pub text: String,
    /// Text to restore on reset.
    pub idle_text: String,
    pub spinner_visible: bool,
}

impl SubmitButton {
    pub fn idle(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            disabled: false,
            idle_text: text.clone(),
            text,
            spinner_visible: false,
        }
    }
}

/// Navbar, sidebar and menus.
#[state("ui/layout")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub viewport_width: u32,
    pub last_scroll_y: f64,
    pub navbar_hidden: bool,
    /// Sidebar CSS `top`; only managed on desktop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_top: Option<String>,
    /// Mobile slide-in sidebar.
    pub sidebar_open: bool,
    /// Desktop pinned sidebar.
    pub sidebar_pinned: bool,
    pub menu_open: bool,
    pub profile_open: bool,
}

impl LayoutState {
    pub fn is_desktop(&self) -> bool {
        self.viewport_width >= DESKTOP_MIN_WIDTH
    }

    /// Sidebar CSS `height` matching [`Self::sidebar_top`].
    pub fn sidebar_height(&self) -> Option<String> {
        self.sidebar_top
            .as_ref()
            .map(|top| format!("calc(100vh - {})", top))
    }

    /// Apply a scroll to offset `y`.
    pub fn scroll_to(&mut self, y: f64) {
        let scrolling_down = y > self.last_scroll_y && y > NAVBAR_HIDE_AFTER;
        self.navbar_hidden = scrolling_down;
        if self.is_desktop() {
            let top = if scrolling_down { "0" } else { "4rem" };
            self.sidebar_top = Some(top.to_string());
        }
        self.last_scroll_y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> LayoutState {
        LayoutState {
            viewport_width: 1280,
            sidebar_top: Some("4rem".into()),
            ..LayoutState::default()
        }
    }

    #[test]
    fn navbar_stays_near_top() {
        let mut layout = desktop();
        layout.scroll_to(80.0);
        assert!(!layout.navbar_hidden);
        assert_eq!(layout.sidebar_top.as_deref(), Some("4rem"));
    }

    #[test]
    fn navbar_hides_scrolling_down_and_returns_scrolling_up() {
        let mut layout = desktop();
        layout.scroll_to(150.0);
        assert!(layout.navbar_hidden);
        assert_eq!(layout.sidebar_top.as_deref(), Some("0"));
        assert_eq!(layout.sidebar_height().as_deref(), Some("calc(100vh - 0)"));

        layout.scroll_to(120.0);
        assert!(!layout.navbar_hidden);
        assert_eq!(layout.sidebar_top.as_deref(), Some("4rem"));
    }

    #[test]
    fn mobile_leaves_sidebar_offset_alone() {
        let mut layout = LayoutState {
            viewport_width: 400,
            ..LayoutState::default()
        };
        layout.scroll_to(500.0);
        assert!(layout.navbar_hidden);
        assert!(layout.sidebar_top.is_none());
    }
}
