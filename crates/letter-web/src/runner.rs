use std::cell::RefCell;
use letter_engine::{InputEvent, InputQueue, LetterController, Surface, ToneSynth};

/// Longest frame delta fed to the controller. Background tabs can pause
/// animation frames for seconds; timers then resume instead of jumping.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Wires DOM input and animation frames into the controller.
///
/// The browser build keeps one `thread_local!` runner (see `lib.rs`); DOM
/// callbacks only push into the queue, which is drained at the start of the
/// next frame.
pub struct WidgetRunner<S: Surface, A: ToneSynth> {
    controller: LetterController<S, A>,
    input: InputQueue,
    initialized: bool,
}

impl<S: Surface, A: ToneSynth> WidgetRunner<S, A> {
    pub fn new(controller: LetterController<S, A>) -> Self {
        Self {
            controller,
            input: InputQueue::new(),
            initialized: false,
        }
    }

    /// Initialize the controller. Call once after construction.
    pub fn init(&mut self) {
        self.controller.init();
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn pending_inputs(&self) -> usize {
        self.input.len()
    }

    /// Probe audio. Must run inside a user gesture so the browser lets the
    /// context start.
    pub fn arm_audio(&mut self) -> bool {
        self.controller.arm_audio()
    }

    /// Run one frame: dispatch queued input, then advance time.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        for event in self.input.drain() {
            self.controller.handle(&event);
        }

        self.controller.tick(dt.clamp(0.0, MAX_FRAME_DT));

        for event in self.controller.drain_events() {
            log::debug!("widget event {:?}", event);
        }
    }

    pub fn controller(&self) -> &LetterController<S, A> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LetterController<S, A> {
        &mut self.controller
    }
}

/// Store `runner` in `slot`, then run `wire`. If wiring fails the slot is
/// emptied again, so a later init starts from scratch instead of finding a
/// runner with no listeners attached.
pub fn install_runner<T, E>(
    slot: &RefCell<Option<T>>,
    runner: T,
    wire: impl FnOnce() -> Result<(), E>,
) -> Result<(), E> {
    *slot.borrow_mut() = Some(runner);
    if let Err(err) = wire() {
        slot.borrow_mut().take();
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use letter_engine::{
        Key, LetterState, RecordingSurface, RecordingSynth, Target, ViewId, WidgetConfig,
    };

    type TestRunner = WidgetRunner<RecordingSurface, RecordingSynth>;

    fn runner() -> TestRunner {
        let controller = LetterController::new(
            WidgetConfig::default(),
            RecordingSurface::new(),
            RecordingSynth::available(),
        );
        let mut runner = WidgetRunner::new(controller);
        runner.init();
        runner
    }

    fn frames(runner: &mut TestRunner, n: u32) {
        for _ in 0..n {
            runner.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn input_waits_for_next_frame() {
        let mut r = runner();
        r.push_input(InputEvent::Activate(Target::Seal));
        assert_eq!(r.pending_inputs(), 1);
        assert_eq!(r.controller().intended_state(), LetterState::Closed);

        r.tick(1.0 / 60.0);
        assert_eq!(r.pending_inputs(), 0);
        assert_eq!(r.controller().intended_state(), LetterState::Opened);

        frames(&mut r, 30);
        assert_eq!(r.controller().state(), LetterState::Opened);
        assert_eq!(r.controller().surface().displayed_views(), vec![ViewId::Opened]);
    }

    #[test]
    fn uninitialized_runner_ignores_frames() {
        let controller = LetterController::new(
            WidgetConfig::default(),
            RecordingSurface::new(),
            RecordingSynth::available(),
        );
        let mut r = WidgetRunner::new(controller);
        r.push_input(InputEvent::KeyDown(Key::Enter));
        r.tick(1.0);
        assert!(!r.is_initialized());
        assert_eq!(r.pending_inputs(), 1);
        assert_eq!(r.controller().intended_state(), LetterState::Closed);
    }

    #[test]
    fn events_are_drained_each_frame() {
        let mut r = runner();
        assert!(r.arm_audio());
        r.push_input(InputEvent::KeyDown(Key::Enter));
        r.tick(1.0 / 60.0);
        assert!(r.controller().events().is_empty());
        assert_eq!(r.controller().audio().played.len(), 1);
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown(Key::Enter));
        r.tick(5.0);
        assert_eq!(r.controller().state(), LetterState::Closed, "one clamped frame is shorter than the delay");
        r.tick(5.0);
        assert_eq!(r.controller().state(), LetterState::Opened);
    }

    #[test]
    fn escape_then_enter_round_trip() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown(Key::Enter));
        frames(&mut r, 60);
        r.push_input(InputEvent::KeyDown(Key::Escape));
        frames(&mut r, 60);
        assert_eq!(r.controller().state(), LetterState::Closed);
        assert!(!r.controller().surface().page_open);
    }

    #[test]
    fn failed_wiring_leaves_no_runner() {
        let slot: RefCell<Option<TestRunner>> = RefCell::new(None);
        let result = install_runner(&slot, runner(), || {
            assert!(slot.borrow().is_some(), "runner is reachable while wiring");
            Err("missing element #waxSeal")
        });
        assert_eq!(result, Err("missing element #waxSeal"));
        assert!(slot.borrow().is_none());

        assert_eq!(install_runner(&slot, runner(), || Ok::<(), &str>(())), Ok(()));
        assert!(slot.borrow().as_ref().is_some_and(|r| r.is_initialized()));
    }
}
