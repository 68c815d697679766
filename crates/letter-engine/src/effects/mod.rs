pub mod wisp;

pub use wisp::{Wisp, WispField};
