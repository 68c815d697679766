/// An interactive element of the widget that can be activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The wax seal itself.
    Seal,
    /// The closed-letter area outside the seal.
    ClosedLetter,
    /// The "close letter" control.
    CloseControl,
    /// The handwriting/print toggle.
    HandwritingControl,
    /// The "customize initial" control.
    CustomizeControl,
    /// The close button inside the customize modal.
    ModalClose,
    /// An initial option in the modal, carrying its value.
    InitialOption(String),
    /// The modal overlay itself (not one of its children).
    ModalBackdrop,
    /// Anything else inside the modal.
    ModalContent,
}

/// A key press, reduced to what the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    /// A single printable character, lowercased.
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                    _ => Key::Other,
                }
            }
        }
    }

    /// Enter and Space toggle the letter and suppress the browser default.
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Input event types the widget understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A pointer click or keyboard activation on a target.
    Activate(Target),
    /// A global key press.
    KeyDown(Key),
}

/// A queue of input events.
/// DOM callbacks push events; the runner drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Activate(Target::Seal));
        q.push(InputEvent::KeyDown(Key::Escape));
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::Activate(Target::Seal));
        assert!(q.is_empty());
    }

    #[test]
    fn dom_keys() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("H"), Key::Char('h'));
        assert_eq!(Key::from_dom("c"), Key::Char('c'));
        assert_eq!(Key::from_dom("Shift"), Key::Other);
        assert!(Key::Space.is_activation());
        assert!(!Key::Escape.is_activation());
    }
}
