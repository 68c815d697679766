//! DOM listener wiring, click target resolution, accessibility cues and the
//! animation frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Window};
use letter_engine::{InputEvent, Key, Target};
use crate::dom::{optional, required, set_styles, DomSelectors, INITIAL_ATTR};
use crate::with_runner;

const SEAL_ARIA_LABEL: &str = "Click to open the vintage letter";

const SEAL_FOCUS: &[(&str, &str)] = &[
    ("outline", "3px solid #D4AF37"),
    ("outline-offset", "3px"),
    ("transform", "scale(1.05)"),
];
const SEAL_BLUR: &[(&str, &str)] = &[("outline", "none"), ("transform", "scale(1)")];
const SEAL_HOVER: &[(&str, &str)] = &[
    ("transform", "scale(1.08) rotate(2deg)"),
    ("filter", "brightness(1.2) drop-shadow(0 10px 20px rgba(0, 0, 0, 0.5))"),
];
const SEAL_REST: &[(&str, &str)] = &[
    ("transform", "scale(1) rotate(0deg)"),
    ("filter", "brightness(1) drop-shadow(0 8px 16px rgba(0, 0, 0, 0.3))"),
];

/// Map the element a click landed on to the widget target it activates.
/// The seal is checked before the closed-letter area that contains it, and
/// the modal backdrop only counts when it was hit directly.
pub fn resolve_target(element: &Element, selectors: &DomSelectors) -> Option<Target> {
    let within = |selector: &str| element.closest(selector).ok().flatten();

    if within(selectors.seal).is_some() {
        return Some(Target::Seal);
    }
    if let Some(option) = within(selectors.initial_option) {
        return option.get_attribute(INITIAL_ATTR).map(Target::InitialOption);
    }

    let controls = [
        (selectors.modal_close, Target::ModalClose),
        (selectors.close_control, Target::CloseControl),
        (selectors.handwriting_control, Target::HandwritingControl),
        (selectors.customize_control, Target::CustomizeControl),
    ];
    for (selector, target) in controls {
        if within(selector).is_some() {
            return Some(target);
        }
    }

    if element.matches(selectors.modal).unwrap_or(false) {
        return Some(Target::ModalBackdrop);
    }
    if within(selectors.modal).is_some() {
        return Some(Target::ModalContent);
    }
    if within(selectors.closed_view).is_some() {
        return Some(Target::ClosedLetter);
    }
    None
}

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Route document clicks and key presses into the runner's input queue.
pub fn bind_input(document: &Document, selectors: DomSelectors) -> Result<(), JsValue> {
    listen(document, "click", move |event: Event| {
        with_runner(|r| r.arm_audio());
        let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(target) = resolve_target(&element, &selectors) {
            with_runner(|r| r.push_input(InputEvent::Activate(target)));
        }
    })?;

    listen(document, "keydown", |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_dom(&event.key());
        if key.is_activation() {
            event.prevent_default();
        }
        if key == Key::Other {
            return;
        }
        with_runner(|r| {
            r.arm_audio();
            r.push_input(InputEvent::KeyDown(key));
        });
    })?;

    Ok(())
}

/// Keyboard focusability, button semantics and focus/hover cues on the seal.
pub fn install_accessibility(document: &Document, selectors: &DomSelectors) -> Result<(), JsValue> {
    let seal: HtmlElement = required(document, selectors.seal)?.dyn_into()?;
    seal.set_attribute("tabindex", "0")?;
    seal.set_attribute("role", "button")?;
    seal.set_attribute("aria-label", SEAL_ARIA_LABEL)?;

    let controls = [
        selectors.close_control,
        selectors.handwriting_control,
        selectors.customize_control,
    ];
    for control in controls.into_iter().filter_map(|s| optional(document, s)) {
        control.set_attribute("tabindex", "0")?;
    }

    let cues = [
        ("focus", SEAL_FOCUS),
        ("blur", SEAL_BLUR),
        ("mouseenter", SEAL_HOVER),
        ("mouseleave", SEAL_REST),
    ];
    for (kind, styles) in cues {
        let element = seal.clone();
        listen(&seal, kind, move |_| {
            set_styles(&element, styles).ok();
        })?;
    }
    Ok(())
}

/// Drive the runner from `requestAnimationFrame` for the life of the page.
pub fn start_frame_loop(window: Window) -> Result<(), JsValue> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&frame);
    let scheduler = window.clone();
    let mut last: Option<f64> = None;

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let dt = last.map_or(0.0, |prev| ((timestamp - prev) / 1000.0) as f32);
        last = Some(timestamp);
        with_runner(|r| r.tick(dt));

        if let Some(callback) = next.borrow().as_ref() {
            scheduler.request_animation_frame(callback.as_ref().unchecked_ref()).ok();
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
