pub mod tone;
pub mod synth;

pub use tone::{ToneSpec, Sweep, Waveform, WAX_BREAK, PAPER_TEAR};
pub use synth::{ToneSynth, AudioCapability, SilentSynth, RecordingSynth};
