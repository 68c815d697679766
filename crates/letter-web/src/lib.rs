pub mod audio;
pub mod dom;
pub mod events;
pub mod runner;

pub use audio::WebAudioSynth;
pub use dom::{DomSelectors, DomSurface};
pub use runner::{install_runner, WidgetRunner};

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use letter_engine::{LetterController, WidgetConfig};

type BrowserRunner = WidgetRunner<DomSurface, WebAudioSynth>;

thread_local! {
    static RUNNER: RefCell<Option<BrowserRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the page's runner. Returns `None` before `letter_init`
/// or when called re-entrantly from inside another runner borrow.
pub(crate) fn with_runner<R>(f: impl FnOnce(&mut BrowserRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let Ok(mut borrow) = cell.try_borrow_mut() else {
            log::debug!("runner busy, call dropped");
            return None;
        };
        borrow.as_mut().map(f)
    })
}

/// Bind the widget to the page, reading the initial set and default
/// initial from the markup.
#[wasm_bindgen]
pub fn letter_init() -> Result<(), JsValue> {
    start(None)
}

/// Bind the widget with timings and initials taken from a JSON config.
#[wasm_bindgen]
pub fn letter_init_with_config(json: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json(json)
        .map_err(|err| JsValue::from_str(&format!("invalid letter config: {}", err)))?;
    start(Some(config))
}

fn start(config: Option<WidgetConfig>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if RUNNER.with(|cell| cell.borrow().is_some()) {
        log::warn!("letter: already initialized");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let selectors = DomSelectors::default();

    let surface = DomSurface::bind(&window, &selectors)?;
    let config = match config {
        Some(config) => config,
        None => surface.config_from_markup(WidgetConfig::default()),
    };

    let controller = LetterController::new(config, surface, WebAudioSynth::new());
    let mut runner = WidgetRunner::new(controller);
    runner.init();

    RUNNER.with(|cell| {
        install_runner(cell, runner, || {
            events::install_accessibility(&document, &selectors)?;
            events::bind_input(&document, selectors)?;
            events::start_frame_loop(window)
        })
    })?;

    log::info!("letter: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn letter_open() -> bool {
    with_runner(|r| r.controller_mut().open()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn letter_close() -> bool {
    with_runner(|r| r.controller_mut().close()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn letter_toggle_handwriting() -> bool {
    with_runner(|r| r.controller_mut().toggle_handwriting()).unwrap_or(false)
}

/// Change the seal initial. Returns false for values outside the
/// configured set.
#[wasm_bindgen]
pub fn letter_set_initial(initial: &str) -> bool {
    with_runner(|r| r.controller_mut().set_seal_initial(initial)).unwrap_or(false)
}

/// Whether the letter currently rests open.
#[wasm_bindgen]
pub fn letter_is_open() -> bool {
    with_runner(|r| r.controller().is_open()).unwrap_or(false)
}
