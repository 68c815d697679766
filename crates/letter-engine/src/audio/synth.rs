use super::tone::ToneSpec;

/// Audio seam. Implementations must never fail loudly: a backend that
/// cannot produce sound reports `false` from `probe` and is never asked to play.
pub trait ToneSynth {
    /// Try to acquire an output. Called once, at the first user interaction.
    fn probe(&mut self) -> bool;

    fn play(&mut self, tone: &ToneSpec);
}

/// Cached result of the one-time capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioCapability {
    #[default]
    Unprobed,
    Available,
    Unavailable,
}

impl AudioCapability {
    pub fn sound_available(self) -> bool {
        self == AudioCapability::Available
    }
}

/// Synth for hosts without audio output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSynth;

impl ToneSynth for SilentSynth {
    fn probe(&mut self) -> bool {
        false
    }

    fn play(&mut self, _tone: &ToneSpec) {}
}

/// Synth that remembers what it was asked to play.
#[derive(Debug, Clone, Default)]
pub struct RecordingSynth {
    /// What `probe` reports.
    pub available: bool,
    pub probes: u32,
    pub played: Vec<ToneSpec>,
}

impl RecordingSynth {
    pub fn available() -> Self {
        Self { available: true, ..Self::default() }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl ToneSynth for RecordingSynth {
    fn probe(&mut self) -> bool {
        self.probes += 1;
        self.available
    }

    fn play(&mut self, tone: &ToneSpec) {
        self.played.push(*tone);
    }
}
