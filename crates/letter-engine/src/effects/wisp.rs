//! Scent wisps: the small glowing dot that drifts up from the seal.

use glam::Vec2;
use crate::api::types::WispId;
use crate::extensions::easing::{Easing, ease, ease_vec2};
use crate::surface::{Surface, WispFrame};

/// A single wisp and its animation clock.
#[derive(Debug, Clone)]
pub struct Wisp {
    pub id: WispId,
    pub elapsed: f32,
}

impl Wisp {
    /// Pause before the wisp starts to rise.
    pub const DELAY: f32 = 0.1;
    /// Rise time; the wisp is removed when it completes.
    pub const DURATION: f32 = 3.0;
    /// Distance travelled upwards, in CSS pixels.
    pub const RISE: f32 = 200.0;
    pub const END_SCALE: f32 = 0.3;
    pub const EASING: Easing = Easing::QuadOut;

    pub fn new(id: WispId) -> Self {
        Self { id, elapsed: 0.0 }
    }

    /// Advance the clock. Returns false when expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed < Self::DELAY + Self::DURATION
    }

    /// Pose for the current clock value.
    pub fn frame(&self) -> WispFrame {
        let t = ((self.elapsed - Self::DELAY) / Self::DURATION).clamp(0.0, 1.0);
        WispFrame {
            opacity: ease(0.0, 1.0, t, Self::EASING),
            offset: ease_vec2(Vec2::ZERO, Vec2::new(0.0, -Self::RISE), t, Self::EASING),
            scale: ease(1.0, Self::END_SCALE, t, Self::EASING),
        }
    }
}

/// All live wisps.
#[derive(Debug, Default)]
pub struct WispField {
    wisps: Vec<Wisp>,
    next_id: u32,
}

impl WispField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, surface: &mut impl Surface) -> WispId {
        let id = WispId(self.next_id);
        self.next_id += 1;
        let wisp = Wisp::new(id);
        surface.spawn_wisp(id);
        surface.update_wisp(id, &wisp.frame());
        self.wisps.push(wisp);
        id
    }

    /// Advance every wisp, updating or removing it on the surface.
    pub fn tick(&mut self, dt: f32, surface: &mut impl Surface) {
        self.wisps.retain_mut(|wisp| {
            if wisp.tick(dt) {
                surface.update_wisp(wisp.id, &wisp.frame());
                true
            } else {
                surface.remove_wisp(wisp.id);
                false
            }
        });
    }

    pub fn len(&self) -> usize {
        self.wisps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wisps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn wisp_waits_then_rises() {
        let mut w = Wisp::new(WispId(0));
        w.tick(0.05);
        assert_eq!(w.frame().opacity, 0.0);
        w.tick(1.55);
        let f = w.frame();
        assert!(f.opacity > 0.5);
        assert!(f.offset.y < -100.0);
        assert!(f.scale < 1.0);
    }

    #[test]
    fn wisp_expires_after_lifetime() {
        let mut w = Wisp::new(WispId(0));
        assert!(w.tick(3.0));
        assert!(!w.tick(0.2));
    }

    #[test]
    fn field_mirrors_wisps_on_surface() {
        let mut surface = RecordingSurface::new();
        let mut field = WispField::new();
        let a = field.spawn(&mut surface);
        let b = field.spawn(&mut surface);
        assert_ne!(a, b);
        assert_eq!(surface.wisps.len(), 2);
        assert!(surface.wisps[&a].is_some());

        field.tick(1.0, &mut surface);
        assert_eq!(field.len(), 2);

        field.tick(3.0, &mut surface);
        assert!(field.is_empty());
        assert!(surface.wisps.is_empty());
        assert_eq!(surface.wisps_spawned, 2);
    }
}
