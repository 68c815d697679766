//! Presentation seam.
//!
//! The controller owns every piece of widget state; a `Surface` only mirrors
//! it. The browser implementation lives in `letter-web` (`DomSurface`),
//! tests use [`RecordingSurface`](super::recording::RecordingSurface).

use glam::Vec2;
use crate::api::types::{SealAnimation, ViewId, WispId};

/// Visual state of one display region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStyle {
    /// Whether the region takes part in layout at all.
    pub displayed: bool,
    pub opacity: f32,
    pub scale: f32,
    /// Vertical offset in CSS pixels, positive is down.
    pub offset_y: f32,
}

impl ViewStyle {
    pub const HIDDEN: ViewStyle = ViewStyle { displayed: false, opacity: 0.0, scale: 0.95, offset_y: 0.0 };
    pub const RESTING: ViewStyle = ViewStyle { displayed: true, opacity: 1.0, scale: 1.0, offset_y: 0.0 };
    /// Starting pose of a view that is about to fade in.
    pub const ENTERING: ViewStyle = ViewStyle { displayed: true, opacity: 0.0, scale: 0.95, offset_y: 0.0 };
    /// Starting pose of the closed view on page load.
    pub const ARRIVING: ViewStyle = ViewStyle { displayed: true, opacity: 0.0, scale: 0.8, offset_y: 50.0 };
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// What the handwriting toggle shows, and whether the paper uses the script face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandwritingStyle {
    pub enabled: bool,
    pub icon: &'static str,
    pub label: &'static str,
}

impl HandwritingStyle {
    pub fn for_mode(enabled: bool) -> Self {
        if enabled {
            Self { enabled, icon: "📝", label: "Print" }
        } else {
            Self { enabled, icon: "✒️", label: "Handwriting" }
        }
    }
}

/// Per-frame pose of a scent wisp, relative to the seal centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WispFrame {
    pub opacity: f32,
    pub offset: Vec2,
    pub scale: f32,
}

/// Everything the controller can change on screen.
pub trait Surface {
    fn apply_view_style(&mut self, view: ViewId, style: &ViewStyle);

    /// Page-level "letter is open" flag (layout and scrolling changes).
    fn set_page_open(&mut self, open: bool);

    fn scroll_to_origin(&mut self);

    fn set_seal_animation(&mut self, animation: SealAnimation);

    /// Glyph on the wax seal.
    fn set_seal_initial(&mut self, initial: &str);

    /// Secondary label repeating the initial at the foot of the letter.
    fn set_closing_initial(&mut self, initial: &str);

    /// Mark exactly the option carrying `initial` as selected.
    fn mark_selected_initial(&mut self, initial: &str);

    fn set_modal_visible(&mut self, visible: bool);

    fn set_handwriting(&mut self, style: &HandwritingStyle);

    fn spawn_wisp(&mut self, id: WispId);

    fn update_wisp(&mut self, id: WispId, frame: &WispFrame);

    fn remove_wisp(&mut self, id: WispId);
}
