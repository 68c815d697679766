pub mod api;
pub mod core;
pub mod input;
pub mod surface;
pub mod audio;
pub mod effects;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::WidgetConfig;
pub use api::controller::LetterController;
pub use api::types::{LetterState, ViewId, ToneKind, WispId, SealAnimation, WidgetEvent};
pub use self::core::scheduler::{Scheduler, Task, TaskKey};
pub use input::queue::{InputEvent, InputQueue, Key, Target};
pub use input::bindings::{Action, Conditions, BINDINGS};
pub use surface::{Surface, ViewStyle, HandwritingStyle, WispFrame, RecordingSurface};
pub use audio::{ToneSpec, ToneSynth, AudioCapability, SilentSynth, RecordingSynth, Waveform, Sweep};
pub use effects::{Wisp, WispField};
pub use extensions::{Easing, TweenState, StyleProperty};
