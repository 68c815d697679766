// extensions/tween.rs
//
// View style tweens: animated opacity/scale/offset transitions keyed by
// (view, property). Adding a tween for a slot that is already animating
// replaces it, starting from the value currently on screen.
//
// Usage:
//   tweens.animate(ViewId::Closed, &styles, StyleProperty::Opacity, 0.0, 0.4, Easing::SineInOut);
//   let touched = tweens.tick(dt, &mut styles);

use std::collections::HashMap;
use crate::api::types::ViewId;
use crate::surface::ViewStyle;
use super::easing::{Easing, ease};

/// Which numeric field of a [`ViewStyle`] a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Opacity,
    Scale,
    OffsetY,
}

impl StyleProperty {
    pub fn get(self, style: &ViewStyle) -> f32 {
        match self {
            StyleProperty::Opacity => style.opacity,
            StyleProperty::Scale => style.scale,
            StyleProperty::OffsetY => style.offset_y,
        }
    }

    pub fn set(self, style: &mut ViewStyle, value: f32) {
        match self {
            StyleProperty::Opacity => style.opacity = value,
            StyleProperty::Scale => style.scale = value,
            StyleProperty::OffsetY => style.offset_y = value,
        }
    }
}

/// A single running transition.
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
    /// False until the first frame after creation has painted `from`.
    started: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self { from, to, duration, elapsed: 0.0, easing, started: false }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        let t = self.progress();
        if t >= 1.0 {
            self.to
        } else {
            ease(self.from, self.to, t, self.easing)
        }
    }
}

/// Manages all active view tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<(ViewId, StyleProperty), Tween>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate one property of `view` from its current value to `to`.
    pub fn animate(
        &mut self,
        view: ViewId,
        styles: &[ViewStyle; 2],
        property: StyleProperty,
        to: f32,
        duration: f32,
        easing: Easing,
    ) {
        let from = property.get(&styles[view.index()]);
        self.tweens.insert((view, property), Tween::new(from, to, duration, easing));
    }

    /// Animate every field of `view` towards `target` (display flag excluded).
    pub fn animate_to(
        &mut self,
        view: ViewId,
        styles: &[ViewStyle; 2],
        target: &ViewStyle,
        duration: f32,
        easing: Easing,
    ) {
        for property in [StyleProperty::Opacity, StyleProperty::Scale, StyleProperty::OffsetY] {
            let to = property.get(target);
            self.animate(view, styles, property, to, duration, easing);
        }
    }

    /// Stop every tween on `view`, leaving its style where it is.
    pub fn cancel_view(&mut self, view: ViewId) {
        self.tweens.retain(|(v, _), _| *v != view);
    }

    /// Advance all tweens and write their values into `styles`.
    /// Returns the views whose style changed this tick.
    pub fn tick(&mut self, dt: f32, styles: &mut [ViewStyle; 2]) -> Vec<ViewId> {
        let mut touched: Vec<ViewId> = Vec::new();

        for (&(view, property), tween) in self.tweens.iter_mut() {
            if tween.started {
                tween.elapsed += dt;
            } else {
                // First frame paints the start value so the move begins cleanly.
                tween.started = true;
            }
            property.set(&mut styles[view.index()], tween.value());
            if !touched.contains(&view) {
                touched.push(view);
            }
        }

        self.tweens.retain(|_, t| !t.is_complete());
        touched.sort_by_key(|v| v.index());
        touched
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animating(tweens: &TweenState, view: ViewId) -> bool {
        tweens.tweens.keys().any(|(v, _)| *v == view)
    }

    fn styles() -> [ViewStyle; 2] {
        [ViewStyle::RESTING, ViewStyle::HIDDEN]
    }

    #[test]
    fn first_tick_paints_start_then_advances() {
        let mut s = styles();
        let mut tweens = TweenState::new();
        tweens.animate(ViewId::Closed, &s, StyleProperty::Opacity, 0.0, 1.0, Easing::Linear);

        let touched = tweens.tick(0.5, &mut s);
        assert_eq!(touched, vec![ViewId::Closed]);
        assert_eq!(s[0].opacity, 1.0, "start frame must not move");

        tweens.tick(0.5, &mut s);
        assert!((s[0].opacity - 0.5).abs() < 0.001);

        tweens.tick(0.5, &mut s);
        assert_eq!(s[0].opacity, 0.0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn replacing_starts_from_current_value() {
        let mut s = styles();
        let mut tweens = TweenState::new();
        tweens.animate(ViewId::Closed, &s, StyleProperty::Opacity, 0.0, 1.0, Easing::Linear);
        tweens.tick(0.0, &mut s);
        tweens.tick(0.25, &mut s);
        assert!((s[0].opacity - 0.75).abs() < 0.001);

        tweens.animate(ViewId::Closed, &s, StyleProperty::Opacity, 1.0, 1.0, Easing::Linear);
        assert_eq!(tweens.len(), 1);
        assert!((tweens.tweens[&(ViewId::Closed, StyleProperty::Opacity)].from - 0.75).abs() < 0.001);
    }

    #[test]
    fn animate_to_drives_all_fields() {
        let mut s = [ViewStyle::ARRIVING, ViewStyle::HIDDEN];
        let mut tweens = TweenState::new();
        tweens.animate_to(ViewId::Closed, &s, &ViewStyle::RESTING, 1.2, Easing::CubicOut);
        assert_eq!(tweens.len(), 3);

        tweens.tick(0.0, &mut s);
        tweens.tick(1.2, &mut s);
        assert_eq!(s[0], ViewStyle::RESTING);
        assert!(!animating(&tweens, ViewId::Closed));
    }

    #[test]
    fn cancel_view_keeps_other_view() {
        let s = styles();
        let mut tweens = TweenState::new();
        tweens.animate(ViewId::Closed, &s, StyleProperty::Opacity, 0.0, 1.0, Easing::Linear);
        tweens.animate(ViewId::Opened, &s, StyleProperty::Opacity, 1.0, 1.0, Easing::Linear);
        tweens.cancel_view(ViewId::Closed);
        assert!(!animating(&tweens, ViewId::Closed));
        assert!(animating(&tweens, ViewId::Opened));
    }
}
