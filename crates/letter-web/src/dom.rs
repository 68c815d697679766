use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use letter_engine::{
    HandwritingStyle, SealAnimation, Surface, ViewId, ViewStyle, WidgetConfig, WispFrame, WispId,
};

pub const PAGE_OPEN_CLASS: &str = "letter-open";
pub const MODAL_SHOWN_CLASS: &str = "show";
pub const SELECTED_CLASS: &str = "selected";
pub const HANDWRITING_CLASS: &str = "handwriting-mode";
pub const WISP_CLASS: &str = "scent-wisp";
pub const INITIAL_ATTR: &str = "data-initial";

const SEAL_PULSE_ANIMATION: &str = "sealPulse 0.3s ease-in-out";
const SEAL_BREATHING_ANIMATION: &str = "sealBreathing 4s ease-in-out infinite";

const WISP_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "50%"),
    ("left", "50%"),
    ("width", "4px"),
    ("height", "4px"),
    ("background", "radial-gradient(circle, rgba(255, 255, 255, 0.8) 0%, transparent 70%)"),
    ("border-radius", "50%"),
    ("opacity", "0"),
    ("pointer-events", "none"),
    ("z-index", "1"),
];

/// Where the widget's elements live in the host page.
#[derive(Debug, Clone, Copy)]
pub struct DomSelectors {
    pub closed_view: &'static str,
    pub opened_view: &'static str,
    pub seal: &'static str,
    pub seal_glyph: &'static str,
    pub closing_label: &'static str,
    pub close_control: &'static str,
    pub handwriting_control: &'static str,
    pub handwriting_icon: &'static str,
    pub handwriting_text: &'static str,
    pub paper: &'static str,
    pub customize_control: &'static str,
    pub modal: &'static str,
    pub modal_close: &'static str,
    pub initial_option: &'static str,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            closed_view: "#letterClosed",
            opened_view: "#letterOpened",
            seal: "#waxSeal",
            seal_glyph: ".seal-initial",
            closing_label: ".seal-text-closing",
            close_control: "#closeLetter",
            handwriting_control: "#handwritingToggle",
            handwriting_icon: ".handwriting-icon",
            handwriting_text: ".handwriting-text",
            paper: ".letter-paper-opened",
            customize_control: "#customizeInitial",
            modal: "#modalOverlay",
            modal_close: "#modalClose",
            initial_option: ".initial-option",
        }
    }
}

/// [`Surface`] over the host page's DOM.
///
/// Views are driven frame by frame from Rust, so their CSS transitions are
/// disabled at bind time. Failed style writes are ignored.
pub struct DomSurface {
    window: Window,
    document: Document,
    body: HtmlElement,
    views: [HtmlElement; 2],
    seal: HtmlElement,
    seal_glyph: Option<Element>,
    closing_label: Option<Element>,
    paper: Option<Element>,
    handwriting_icon: Option<Element>,
    handwriting_text: Option<Element>,
    modal: Element,
    options: Vec<Element>,
    wisps: HashMap<WispId, HtmlElement>,
}

impl DomSurface {
    pub fn bind(window: &Window, selectors: &DomSelectors) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let closed = required_html(&document, selectors.closed_view)?;
        let opened = required_html(&document, selectors.opened_view)?;
        let seal = required_html(&document, selectors.seal)?;
        let modal = required(&document, selectors.modal)?;
        let handwriting = optional(&document, selectors.handwriting_control);

        for view in [&closed, &opened] {
            view.style().set_property("transition", "none")?;
        }

        Ok(Self {
            seal_glyph: seal.query_selector(selectors.seal_glyph).ok().flatten(),
            closing_label: optional(&document, selectors.closing_label),
            paper: optional(&document, selectors.paper),
            handwriting_icon: handwriting
                .as_ref()
                .and_then(|h| h.query_selector(selectors.handwriting_icon).ok().flatten()),
            handwriting_text: handwriting
                .as_ref()
                .and_then(|h| h.query_selector(selectors.handwriting_text).ok().flatten()),
            options: query_all(&document, selectors.initial_option)?,
            window: window.clone(),
            document,
            body,
            views: [closed, opened],
            seal,
            modal,
            wisps: HashMap::new(),
        })
    }

    /// Values carried by the option elements, in page order.
    pub fn offered_initials(&self) -> Vec<String> {
        self.options
            .iter()
            .filter_map(|o| o.get_attribute(INITIAL_ATTR))
            .collect()
    }

    /// Fill the initial set and default from the markup, keeping `base`
    /// where the page says nothing.
    pub fn config_from_markup(&self, base: WidgetConfig) -> WidgetConfig {
        let mut config = base;
        let offered = self.offered_initials();
        if !offered.is_empty() {
            config.initials = offered;
        }
        if let Some(initial) = self.seal.get_attribute(INITIAL_ATTR) {
            config.default_initial = initial;
        }
        config.sanitized()
    }

    fn view(&self, view: ViewId) -> &HtmlElement {
        match view {
            ViewId::Closed => &self.views[0],
            ViewId::Opened => &self.views[1],
        }
    }

    fn spawn_wisp_element(&self) -> Result<HtmlElement, JsValue> {
        let wisp: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        wisp.set_class_name(WISP_CLASS);
        set_styles(&wisp, WISP_STYLE)?;
        self.seal.append_child(&wisp)?;
        Ok(wisp)
    }
}

impl Surface for DomSurface {
    fn apply_view_style(&mut self, view: ViewId, style: &ViewStyle) {
        let css = self.view(view).style();
        css.set_property("display", if style.displayed { "block" } else { "none" }).ok();
        css.set_property("opacity", &format!("{:.3}", style.opacity)).ok();
        css.set_property(
            "transform",
            &format!("scale({:.4}) translateY({:.1}px)", style.scale, style.offset_y),
        )
        .ok();
    }

    fn set_page_open(&mut self, open: bool) {
        self.body.class_list().toggle_with_force(PAGE_OPEN_CLASS, open).ok();
    }

    fn scroll_to_origin(&mut self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn set_seal_animation(&mut self, animation: SealAnimation) {
        let css = match animation {
            SealAnimation::Pulse => SEAL_PULSE_ANIMATION,
            SealAnimation::Breathing => SEAL_BREATHING_ANIMATION,
        };
        self.seal.style().set_property("animation", css).ok();
    }

    fn set_seal_initial(&mut self, initial: &str) {
        if let Some(glyph) = &self.seal_glyph {
            glyph.set_text_content(Some(initial));
        }
        self.seal.set_attribute(INITIAL_ATTR, initial).ok();
    }

    fn set_closing_initial(&mut self, initial: &str) {
        if let Some(label) = &self.closing_label {
            label.set_text_content(Some(initial));
        }
    }

    fn mark_selected_initial(&mut self, initial: &str) {
        for option in &self.options {
            let selected = option.get_attribute(INITIAL_ATTR).as_deref() == Some(initial);
            option.class_list().toggle_with_force(SELECTED_CLASS, selected).ok();
        }
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal.class_list().toggle_with_force(MODAL_SHOWN_CLASS, visible).ok();
    }

    fn set_handwriting(&mut self, style: &HandwritingStyle) {
        if let Some(paper) = &self.paper {
            paper.class_list().toggle_with_force(HANDWRITING_CLASS, style.enabled).ok();
        }
        if let Some(icon) = &self.handwriting_icon {
            icon.set_text_content(Some(style.icon));
        }
        if let Some(text) = &self.handwriting_text {
            text.set_text_content(Some(style.label));
        }
    }

    fn spawn_wisp(&mut self, id: WispId) {
        match self.spawn_wisp_element() {
            Ok(wisp) => {
                self.wisps.insert(id, wisp);
            }
            Err(err) => log::debug!("scent wisp not created: {:?}", err),
        }
    }

    fn update_wisp(&mut self, id: WispId, frame: &WispFrame) {
        let Some(wisp) = self.wisps.get(&id) else {
            return;
        };
        let css = wisp.style();
        css.set_property("opacity", &format!("{:.3}", frame.opacity)).ok();
        css.set_property(
            "transform",
            &format!(
                "translate(calc(-50% + {:.1}px), {:.1}px) scale({:.3})",
                frame.offset.x, frame.offset.y, frame.scale
            ),
        )
        .ok();
    }

    fn remove_wisp(&mut self, id: WispId) {
        if let Some(wisp) = self.wisps.remove(&id) {
            wisp.remove();
        }
    }
}

pub(crate) fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), JsValue> {
    let css = element.style();
    for (name, value) in styles {
        css.set_property(name, value)?;
    }
    Ok(())
}

pub(crate) fn required(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing element {}", selector)))
}

fn required_html(document: &Document, selector: &str) -> Result<HtmlElement, JsValue> {
    required(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("{} is not an HTML element", selector)))
}

pub(crate) fn optional(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
