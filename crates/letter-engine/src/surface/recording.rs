use std::collections::BTreeMap;
use crate::api::types::{SealAnimation, ViewId, WispId};
use super::traits::{HandwritingStyle, Surface, ViewStyle, WispFrame};

/// Headless surface that mirrors whatever the controller last applied.
/// Used by unit tests and by hosts without a DOM.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub views: [ViewStyle; 2],
    pub page_open: bool,
    pub scroll_resets: u32,
    pub seal_animation: SealAnimation,
    pub seal_initial: String,
    pub closing_initial: String,
    pub selected_initial: Option<String>,
    pub modal_visible: bool,
    pub handwriting: Option<HandwritingStyle>,
    pub wisps: BTreeMap<WispId, Option<WispFrame>>,
    pub wisps_spawned: u32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, view: ViewId) -> &ViewStyle {
        &self.views[view.index()]
    }

    /// Views currently taking part in layout.
    pub fn displayed_views(&self) -> Vec<ViewId> {
        ViewId::ALL
            .into_iter()
            .filter(|v| self.view(*v).displayed)
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn apply_view_style(&mut self, view: ViewId, style: &ViewStyle) {
        self.views[view.index()] = *style;
    }

    fn set_page_open(&mut self, open: bool) {
        self.page_open = open;
    }

    fn scroll_to_origin(&mut self) {
        self.scroll_resets += 1;
    }

    fn set_seal_animation(&mut self, animation: SealAnimation) {
        self.seal_animation = animation;
    }

    fn set_seal_initial(&mut self, initial: &str) {
        self.seal_initial = initial.to_string();
    }

    fn set_closing_initial(&mut self, initial: &str) {
        self.closing_initial = initial.to_string();
    }

    fn mark_selected_initial(&mut self, initial: &str) {
        self.selected_initial = Some(initial.to_string());
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn set_handwriting(&mut self, style: &HandwritingStyle) {
        self.handwriting = Some(*style);
    }

    fn spawn_wisp(&mut self, id: WispId) {
        self.wisps.insert(id, None);
        self.wisps_spawned += 1;
    }

    fn update_wisp(&mut self, id: WispId, frame: &WispFrame) {
        if let Some(slot) = self.wisps.get_mut(&id) {
            *slot = Some(*frame);
        }
    }

    fn remove_wisp(&mut self, id: WispId) {
        self.wisps.remove(&id);
    }
}
