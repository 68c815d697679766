/// Settled state of the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    #[default]
    Closed,
    Opened,
}

impl LetterState {
    /// The view that is displayed while the letter rests in this state.
    pub fn view(self) -> ViewId {
        match self {
            LetterState::Closed => ViewId::Closed,
            LetterState::Opened => ViewId::Opened,
        }
    }
}

/// One of the two mutually exclusive display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Closed,
    Opened,
}

impl ViewId {
    pub const ALL: [ViewId; 2] = [ViewId::Closed, ViewId::Opened];

    pub fn other(self) -> ViewId {
        match self {
            ViewId::Closed => ViewId::Opened,
            ViewId::Opened => ViewId::Closed,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ViewId::Closed => 0,
            ViewId::Opened => 1,
        }
    }
}

/// The two synthesized cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneKind {
    /// Descending sine played when the seal breaks.
    WaxBreak,
    /// Filtered sawtooth played when the letter is folded away.
    PaperTear,
}

/// Unique identifier for a live scent wisp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WispId(pub u32);

/// Animation currently running on the seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SealAnimation {
    /// Slow idle loop.
    #[default]
    Breathing,
    /// Short press feedback when the seal is activated.
    Pulse,
}

/// Something observable the controller did during a frame.
/// Drained by the runner after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A tone was requested. Recorded even when sound is unavailable.
    Tone(ToneKind),
    /// A scent wisp was spawned.
    Scent,
    /// A pending transition finished and the letter now rests in this state.
    Settled(LetterState),
}
