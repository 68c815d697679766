use crate::api::config::WidgetConfig;
use crate::api::types::{LetterState, SealAnimation, ToneKind, ViewId, WidgetEvent};
use crate::audio::{AudioCapability, ToneSynth};
use crate::core::scheduler::{Scheduler, Task, TaskKey};
use crate::effects::WispField;
use crate::extensions::{Easing, StyleProperty, TweenState};
use crate::input::bindings::{self, Action, Conditions};
use crate::input::queue::{InputEvent, Target};
use crate::surface::{HandwritingStyle, Surface, ViewStyle};

/// Easing used for the exit and fade-in of the two views.
const VIEW_EASING: Easing = Easing::SineInOut;

/// The view-state and interaction controller.
///
/// Owns every piece of widget state. The presentation surface and the tone
/// synth are injected and only ever mirror what the controller decides.
/// Time advances exclusively through [`LetterController::tick`].
pub struct LetterController<S: Surface, A: ToneSynth> {
    config: WidgetConfig,
    surface: S,
    audio: A,
    audio_capability: AudioCapability,
    state: LetterState,
    handwriting: bool,
    seal_initial: String,
    modal_shown: bool,
    scheduler: Scheduler,
    styles: [ViewStyle; 2],
    tweens: TweenState,
    wisps: WispField,
    events: Vec<WidgetEvent>,
}

impl<S: Surface, A: ToneSynth> LetterController<S, A> {
    pub fn new(config: WidgetConfig, surface: S, audio: A) -> Self {
        let config = config.sanitized();
        let seal_initial = config.default_initial.clone();
        Self {
            config,
            surface,
            audio,
            audio_capability: AudioCapability::Unprobed,
            state: LetterState::Closed,
            handwriting: false,
            seal_initial,
            modal_shown: false,
            scheduler: Scheduler::new(),
            styles: [ViewStyle::RESTING, ViewStyle::HIDDEN],
            tweens: TweenState::new(),
            wisps: WispField::new(),
            events: Vec::new(),
        }
    }

    /// Push the whole model to the surface and start the page-load entrance
    /// and the ambient cue. Call once after construction.
    pub fn init(&mut self) {
        self.set_style(ViewId::Closed, ViewStyle::ARRIVING);
        self.set_style(ViewId::Opened, ViewStyle::HIDDEN);
        self.surface.set_page_open(false);
        self.surface.set_seal_animation(SealAnimation::Breathing);
        self.mirror_initial();
        self.surface.mark_selected_initial(&self.seal_initial);
        self.surface.set_handwriting(&HandwritingStyle::for_mode(self.handwriting));
        self.surface.set_modal_visible(false);

        self.scheduler.schedule(Task::EntranceReveal, self.config.entrance_delay);
        self.scheduler.schedule_every(Task::AmbientCue, self.config.ambient_interval);
    }

    /// Probe the audio backend once. Later calls return the cached answer.
    pub fn arm_audio(&mut self) -> bool {
        if self.audio_capability == AudioCapability::Unprobed {
            self.audio_capability = if self.audio.probe() {
                log::info!("audio: available");
                AudioCapability::Available
            } else {
                log::info!("audio: unavailable, continuing without sound");
                AudioCapability::Unavailable
            };
        }
        self.audio_capability.sound_available()
    }

    // ---- Operations ----

    /// Break the seal and open the letter. Returns false if the letter is
    /// already open or opening.
    pub fn open(&mut self) -> bool {
        if self.intended_state() == LetterState::Opened {
            return false;
        }
        self.play(ToneKind::WaxBreak);
        self.spawn_wisp();
        self.surface.set_page_open(true);
        self.begin_transition(LetterState::Opened);
        true
    }

    /// Fold the letter away. Returns false if it is already closed or closing.
    pub fn close(&mut self) -> bool {
        if self.intended_state() == LetterState::Closed {
            return false;
        }
        self.play(ToneKind::PaperTear);
        self.surface.set_page_open(false);
        self.begin_transition(LetterState::Closed);
        true
    }

    /// Flip between handwriting and print faces. Returns the new mode.
    pub fn toggle_handwriting(&mut self) -> bool {
        self.handwriting = !self.handwriting;
        self.surface.set_handwriting(&HandwritingStyle::for_mode(self.handwriting));
        self.handwriting
    }

    /// Change the seal initial. Values outside the configured set are ignored.
    pub fn set_seal_initial(&mut self, initial: &str) -> bool {
        if !self.config.offers(initial) {
            log::warn!("ignoring unknown seal initial {:?}", initial);
            return false;
        }
        self.seal_initial = initial.to_string();
        self.mirror_initial();
        self.surface.mark_selected_initial(initial);
        self.scheduler.schedule(Task::HideModal, self.config.modal_autohide_delay);
        true
    }

    pub fn show_customize_modal(&mut self) {
        self.modal_shown = true;
        self.scheduler.cancel(TaskKey::HideModal);
        self.surface.set_modal_visible(true);
        self.surface.mark_selected_initial(&self.seal_initial);
    }

    pub fn hide_customize_modal(&mut self) {
        self.modal_shown = false;
        self.scheduler.cancel(TaskKey::HideModal);
        self.surface.set_modal_visible(false);
    }

    /// Run one input through the binding table. Returns the action taken.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        let action = bindings::resolve(event, self.conditions())?;
        log::debug!("input {:?} -> {:?}", event, action);

        match &action {
            Action::Open => {
                if self.open() && matches!(event, InputEvent::Activate(Target::Seal)) {
                    self.pulse_seal();
                }
            }
            Action::Close => {
                self.close();
            }
            Action::ToggleHandwriting => {
                self.toggle_handwriting();
            }
            Action::ShowModal => self.show_customize_modal(),
            Action::HideModal => self.hide_customize_modal(),
            Action::SelectInitial(initial) => {
                self.set_seal_initial(initial);
            }
        }
        Some(action)
    }

    /// Advance timers, view tweens and wisps by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for task in self.scheduler.advance(dt) {
            self.run_task(task);
        }

        for view in self.tweens.tick(dt, &mut self.styles) {
            self.surface.apply_view_style(view, &self.styles[view.index()]);
        }

        self.wisps.tick(dt, &mut self.surface);
    }

    // ---- Internals ----

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Transition(target) => self.complete_transition(target),
            Task::HideModal => self.hide_customize_modal(),
            Task::RestoreSealBreathing => self.surface.set_seal_animation(SealAnimation::Breathing),
            Task::EntranceReveal => {
                if self.state == LetterState::Closed && !self.is_transitioning() {
                    self.tweens.animate_to(
                        ViewId::Closed,
                        &self.styles,
                        &ViewStyle::RESTING,
                        self.config.entrance_duration,
                        Easing::CubicOut,
                    );
                }
            }
            Task::AmbientCue => {
                if self.intended_state() == LetterState::Closed {
                    self.spawn_wisp();
                }
            }
        }
    }

    /// Fade out whatever is on screen and schedule the swap.
    /// A newer transition replaces a pending one.
    fn begin_transition(&mut self, target: LetterState) {
        let delay = self.config.transition_delay;
        let leaving = self.state.view();
        self.scheduler.cancel(TaskKey::EntranceReveal);
        self.tweens.cancel_view(leaving.other());
        self.tweens.animate(leaving, &self.styles, StyleProperty::Opacity, 0.0, delay, VIEW_EASING);
        self.tweens.animate(leaving, &self.styles, StyleProperty::Scale, 0.95, delay, VIEW_EASING);
        self.scheduler.schedule(Task::Transition(target), delay);
    }

    fn complete_transition(&mut self, target: LetterState) {
        self.state = target;
        let shown = target.view();
        self.tweens.cancel_view(shown);
        self.tweens.cancel_view(shown.other());
        self.set_style(shown.other(), ViewStyle::HIDDEN);
        self.set_style(shown, ViewStyle::ENTERING);
        self.tweens.animate_to(
            shown,
            &self.styles,
            &ViewStyle::RESTING,
            self.config.fade_in_duration,
            VIEW_EASING,
        );
        if target == LetterState::Opened {
            self.surface.scroll_to_origin();
        }
        log::debug!("letter settled {:?}", target);
        self.events.push(WidgetEvent::Settled(target));
    }

    fn pulse_seal(&mut self) {
        self.surface.set_seal_animation(SealAnimation::Pulse);
        self.scheduler.schedule(Task::RestoreSealBreathing, self.config.seal_pulse_duration);
    }

    fn play(&mut self, tone: ToneKind) {
        self.events.push(WidgetEvent::Tone(tone));
        if self.audio_capability.sound_available() {
            self.audio.play(tone.spec());
        }
    }

    fn spawn_wisp(&mut self) {
        self.wisps.spawn(&mut self.surface);
        self.events.push(WidgetEvent::Scent);
    }

    fn mirror_initial(&mut self) {
        self.surface.set_seal_initial(&self.seal_initial);
        self.surface.set_closing_initial(&self.seal_initial);
    }

    fn set_style(&mut self, view: ViewId, style: ViewStyle) {
        self.styles[view.index()] = style;
        self.surface.apply_view_style(view, &style);
    }

    fn conditions(&self) -> Conditions {
        Conditions {
            letter_open: self.intended_state() == LetterState::Opened,
            modal_shown: self.modal_shown,
        }
    }

    // ---- Accessors ----

    /// The state the letter currently rests in.
    pub fn state(&self) -> LetterState {
        self.state
    }

    /// Where the letter is heading: the pending transition target, or the
    /// resting state when nothing is pending.
    pub fn intended_state(&self) -> LetterState {
        match self.scheduler.pending(TaskKey::Transition) {
            Some(Task::Transition(target)) => target,
            _ => self.state,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == LetterState::Opened
    }

    pub fn is_transitioning(&self) -> bool {
        self.scheduler.is_pending(TaskKey::Transition)
    }

    pub fn handwriting_enabled(&self) -> bool {
        self.handwriting
    }

    pub fn seal_initial(&self) -> &str {
        &self.seal_initial
    }

    pub fn modal_shown(&self) -> bool {
        self.modal_shown
    }

    pub fn audio_capability(&self) -> AudioCapability {
        self.audio_capability
    }

    pub fn view_style(&self, view: ViewId) -> &ViewStyle {
        &self.styles[view.index()]
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[WidgetEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }
}
