//! Page chrome requests.

use flux_derive::request;

#[request("ui/layout/init")]
pub struct InitLayoutReq {
    pub viewport_width: u32,
    pub scroll_y: f64,
    /// Saved desktop sidebar preference.
    pub sidebar_pinned: bool,
}

#[request("ui/scroll")]
pub struct ScrollReq {
    pub y: f64,
}

#[request("ui/resize")]
pub struct ResizeReq {
    pub width: u32,
}

/// Hamburger button of the mobile sidebar.
#[request("ui/sidebar/toggle")]
pub struct ToggleSidebarReq;

/// Pin tab of the desktop sidebar.
#[request("ui/sidebar/pin")]
pub struct PinSidebarReq;

/// A link inside the sidebar was followed.
#[request("ui/sidebar/link")]
pub struct SidebarLinkReq;

#[request("ui/menu/toggle")]
pub struct ToggleMenuReq;

#[request("ui/menu/link")]
pub struct MenuLinkReq;

#[request("ui/profile/toggle")]
pub struct ToggleProfileReq;

/// A click anywhere on the document.
#[request("ui/click")]
pub struct DocumentClickReq {
    /// The click landed on the profile button or inside its dropdown.
    pub inside_profile: bool,
}

/// A page with a submit button was rendered.
#[request("ui/submit/init")]
pub struct InitSubmitReq {
    /// The button's idle label.
    pub text: String,
}

/// A form started a native submission.
#[request("ui/submit/begin")]
pub struct BeginSubmitReq;

#[request("ui/submit/reset")]
pub struct ResetSubmitReq;

/// Close the oldest notice.
#[request("ui/notices/dismiss")]
pub struct DismissNoticeReq;
