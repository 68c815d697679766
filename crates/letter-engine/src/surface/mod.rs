pub mod traits;
pub mod recording;

pub use traits::{Surface, ViewStyle, HandwritingStyle, WispFrame};
pub use recording::RecordingSurface;
