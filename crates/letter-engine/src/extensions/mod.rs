// extensions/mod.rs
//
// Animation helpers. Decoupled from the controller: it owns a TweenState and
// feeds it the current view styles.

pub mod easing;
pub mod tween;

pub use easing::{Easing, ease, ease_vec2};
pub use tween::{TweenState, Tween, StyleProperty};
