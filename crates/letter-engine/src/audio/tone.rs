use crate::api::types::ToneKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

/// An exponential sweep from `start` to `end` over the tone's duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub start: f32,
    pub end: f32,
}

impl Sweep {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Value at normalized time `t`, following an exponential ramp.
    pub fn at(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        self.start * (self.end / self.start).powf(t)
    }
}

/// Parameters of one synthesized cue. Oscillator -> [lowpass] -> gain -> output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    /// Oscillator frequency in Hz.
    pub frequency: Sweep,
    /// Lowpass cutoff in Hz, if filtered.
    pub lowpass: Option<Sweep>,
    pub gain: Sweep,
    /// Seconds.
    pub duration: f32,
}

pub const WAX_BREAK: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    frequency: Sweep::new(200.0, 50.0),
    lowpass: None,
    gain: Sweep::new(0.1, 0.01),
    duration: 0.3,
};

pub const PAPER_TEAR: ToneSpec = ToneSpec {
    waveform: Waveform::Sawtooth,
    frequency: Sweep::new(300.0, 100.0),
    lowpass: Some(Sweep::new(1000.0, 200.0)),
    gain: Sweep::new(0.05, 0.01),
    duration: 0.2,
};

impl ToneKind {
    pub fn spec(self) -> &'static ToneSpec {
        match self {
            ToneKind::WaxBreak => &WAX_BREAK,
            ToneKind::PaperTear => &PAPER_TEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_endpoints() {
        let s = Sweep::new(200.0, 50.0);
        assert!((s.at(0.0) - 200.0).abs() < 1e-3);
        assert!((s.at(1.0) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn exponential_midpoint_is_geometric_mean() {
        let s = Sweep::new(1000.0, 200.0);
        let expected = (1000.0f32 * 200.0).sqrt();
        assert!((s.at(0.5) - expected).abs() < 0.1, "got {}", s.at(0.5));
    }

    #[test]
    fn tear_is_filtered_and_break_is_not() {
        assert!(ToneKind::WaxBreak.spec().lowpass.is_none());
        assert_eq!(ToneKind::PaperTear.spec().waveform, Waveform::Sawtooth);
        assert!(ToneKind::PaperTear.spec().duration < ToneKind::WaxBreak.spec().duration);
    }
}
