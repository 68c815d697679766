pub mod queue;
pub mod bindings;

pub use queue::{InputEvent, InputQueue, Key, Target};
pub use bindings::{Action, Binding, Condition, Conditions, Trigger, BINDINGS, resolve};
