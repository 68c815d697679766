// input/bindings.rs
//
// Declarative input -> action table. Rows are checked in order and the
// first row whose trigger and condition both match wins.

use super::queue::{InputEvent, Key, Target};

/// What the controller should do in response to an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open,
    Close,
    ToggleHandwriting,
    ShowModal,
    HideModal,
    SelectInitial(String),
}

/// The input side of a binding, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Seal,
    ClosedLetter,
    CloseControl,
    HandwritingControl,
    CustomizeControl,
    ModalClose,
    InitialOption,
    ModalBackdrop,
    /// Enter or Space.
    ActivationKey,
    Escape,
    /// A lowercased character key.
    Char(char),
}

impl Trigger {
    pub fn matches(self, event: &InputEvent) -> bool {
        match (self, event) {
            (Trigger::Seal, InputEvent::Activate(Target::Seal)) => true,
            (Trigger::ClosedLetter, InputEvent::Activate(Target::ClosedLetter)) => true,
            (Trigger::CloseControl, InputEvent::Activate(Target::CloseControl)) => true,
            (Trigger::HandwritingControl, InputEvent::Activate(Target::HandwritingControl)) => true,
            (Trigger::CustomizeControl, InputEvent::Activate(Target::CustomizeControl)) => true,
            (Trigger::ModalClose, InputEvent::Activate(Target::ModalClose)) => true,
            (Trigger::InitialOption, InputEvent::Activate(Target::InitialOption(_))) => true,
            (Trigger::ModalBackdrop, InputEvent::Activate(Target::ModalBackdrop)) => true,
            (Trigger::ActivationKey, InputEvent::KeyDown(key)) => key.is_activation(),
            (Trigger::Escape, InputEvent::KeyDown(Key::Escape)) => true,
            (Trigger::Char(c), InputEvent::KeyDown(Key::Char(k))) => c == *k,
            _ => false,
        }
    }
}

/// Guard evaluated against the controller's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    LetterClosed,
    LetterOpen,
    ModalShown,
    ModalHiddenLetterOpen,
}

/// Snapshot of the state the conditions read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    pub letter_open: bool,
    pub modal_shown: bool,
}

impl Condition {
    pub fn holds(self, state: Conditions) -> bool {
        match self {
            Condition::Always => true,
            Condition::LetterClosed => !state.letter_open,
            Condition::LetterOpen => state.letter_open,
            Condition::ModalShown => state.modal_shown,
            Condition::ModalHiddenLetterOpen => !state.modal_shown && state.letter_open,
        }
    }
}

/// Payload-free action kind stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Open,
    Close,
    ToggleHandwriting,
    ShowModal,
    HideModal,
    SelectInitial,
}

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub trigger: Trigger,
    pub condition: Condition,
    pub action: ActionKind,
}

const fn bind(trigger: Trigger, condition: Condition, action: ActionKind) -> Binding {
    Binding { trigger, condition, action }
}

/// The widget's complete input mapping.
pub const BINDINGS: &[Binding] = &[
    bind(Trigger::Seal, Condition::LetterClosed, ActionKind::Open),
    bind(Trigger::ClosedLetter, Condition::LetterClosed, ActionKind::Open),
    bind(Trigger::CloseControl, Condition::Always, ActionKind::Close),
    bind(Trigger::HandwritingControl, Condition::Always, ActionKind::ToggleHandwriting),
    bind(Trigger::CustomizeControl, Condition::Always, ActionKind::ShowModal),
    bind(Trigger::ModalClose, Condition::Always, ActionKind::HideModal),
    bind(Trigger::InitialOption, Condition::ModalShown, ActionKind::SelectInitial),
    bind(Trigger::ModalBackdrop, Condition::ModalShown, ActionKind::HideModal),
    bind(Trigger::ActivationKey, Condition::LetterClosed, ActionKind::Open),
    bind(Trigger::ActivationKey, Condition::LetterOpen, ActionKind::Close),
    bind(Trigger::Escape, Condition::ModalShown, ActionKind::HideModal),
    bind(Trigger::Escape, Condition::ModalHiddenLetterOpen, ActionKind::Close),
    bind(Trigger::Char('h'), Condition::LetterOpen, ActionKind::ToggleHandwriting),
    bind(Trigger::Char('c'), Condition::LetterOpen, ActionKind::ShowModal),
];

/// Resolve an input against a table. Returns the first matching action.
pub fn resolve_in(table: &[Binding], event: &InputEvent, state: Conditions) -> Option<Action> {
    let binding = table
        .iter()
        .find(|b| b.trigger.matches(event) && b.condition.holds(state))?;

    Some(match binding.action {
        ActionKind::Open => Action::Open,
        ActionKind::Close => Action::Close,
        ActionKind::ToggleHandwriting => Action::ToggleHandwriting,
        ActionKind::ShowModal => Action::ShowModal,
        ActionKind::HideModal => Action::HideModal,
        ActionKind::SelectInitial => match event {
            InputEvent::Activate(Target::InitialOption(value)) => Action::SelectInitial(value.clone()),
            _ => return None,
        },
    })
}

/// Resolve an input against [`BINDINGS`].
pub fn resolve(event: &InputEvent, state: Conditions) -> Option<Action> {
    resolve_in(BINDINGS, event, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSED: Conditions = Conditions { letter_open: false, modal_shown: false };
    const OPEN: Conditions = Conditions { letter_open: true, modal_shown: false };
    const OPEN_MODAL: Conditions = Conditions { letter_open: true, modal_shown: true };

    fn key(k: Key) -> InputEvent {
        InputEvent::KeyDown(k)
    }

    fn click(t: Target) -> InputEvent {
        InputEvent::Activate(t)
    }

    #[test]
    fn activation_keys_toggle_letter() {
        assert_eq!(resolve(&key(Key::Enter), CLOSED), Some(Action::Open));
        assert_eq!(resolve(&key(Key::Space), CLOSED), Some(Action::Open));
        assert_eq!(resolve(&key(Key::Enter), OPEN), Some(Action::Close));
        assert_eq!(resolve(&key(Key::Space), OPEN_MODAL), Some(Action::Close));
    }

    #[test]
    fn escape_prefers_modal() {
        assert_eq!(resolve(&key(Key::Escape), OPEN_MODAL), Some(Action::HideModal));
        assert_eq!(resolve(&key(Key::Escape), OPEN), Some(Action::Close));
        assert_eq!(resolve(&key(Key::Escape), CLOSED), None);
    }

    #[test]
    fn shortcuts_only_while_open() {
        assert_eq!(resolve(&key(Key::Char('h')), CLOSED), None);
        assert_eq!(resolve(&key(Key::Char('c')), CLOSED), None);
        assert_eq!(resolve(&key(Key::Char('h')), OPEN), Some(Action::ToggleHandwriting));
        assert_eq!(resolve(&key(Key::Char('c')), OPEN), Some(Action::ShowModal));
        assert_eq!(resolve(&key(Key::Char('x')), OPEN), None);
    }

    #[test]
    fn controls_are_not_gated() {
        assert_eq!(resolve(&click(Target::HandwritingControl), CLOSED), Some(Action::ToggleHandwriting));
        assert_eq!(resolve(&click(Target::CustomizeControl), CLOSED), Some(Action::ShowModal));
        assert_eq!(resolve(&click(Target::CloseControl), CLOSED), Some(Action::Close));
    }

    #[test]
    fn seal_and_closed_area_open_only_when_closed() {
        assert_eq!(resolve(&click(Target::Seal), CLOSED), Some(Action::Open));
        assert_eq!(resolve(&click(Target::ClosedLetter), CLOSED), Some(Action::Open));
        assert_eq!(resolve(&click(Target::Seal), OPEN), None);
    }

    #[test]
    fn backdrop_hides_but_content_does_not() {
        assert_eq!(resolve(&click(Target::ModalBackdrop), OPEN_MODAL), Some(Action::HideModal));
        assert_eq!(resolve(&click(Target::ModalContent), OPEN_MODAL), None);
        assert_eq!(resolve(&click(Target::ModalBackdrop), OPEN), None);
    }

    #[test]
    fn option_selection_carries_value() {
        let event = click(Target::InitialOption("R".into()));
        assert_eq!(resolve(&event, OPEN_MODAL), Some(Action::SelectInitial("R".into())));
        assert_eq!(resolve(&event, OPEN), None);
    }

    #[test]
    fn custom_table_first_match_wins() {
        let table = [
            bind(Trigger::Escape, Condition::Always, ActionKind::Open),
            bind(Trigger::Escape, Condition::Always, ActionKind::Close),
        ];
        assert_eq!(resolve_in(&table, &key(Key::Escape), CLOSED), Some(Action::Open));
    }
}
