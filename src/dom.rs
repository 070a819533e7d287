//! DOM surface: builds the static element tree once and copies each [`Frame`]
//! onto it. Class names come from the bundled stylesheet.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::render::{
    self, CLASS_KEY_DISPLAY, CLASS_MASCOT, CLASS_MASCOT_DISPLAY, CLASS_MASCOT_IMAGE,
    CLASS_MASCOT_NAME, Frame,
};

pub const MOBILE_INPUT_ID: &str = "toddler-keys-input";

// Invisible but still focusable (no display:none), or the soft keyboard never opens.
const HIDDEN_INPUT_STYLE: &str = "position:fixed; bottom:0; left:0; width:1px; height:1px; opacity:0; border:0; padding:0; font-size:16px;";

pub struct Surface {
    root: HtmlElement,
    root_created: bool,
    container: HtmlElement,
    game_area: HtmlElement,
    key_display: HtmlElement,
    mascot_display: HtmlElement,
    mascot_image: HtmlImageElement,
    mascot_name: HtmlElement,
    mobile_panel: HtmlElement,
    mobile_button: HtmlElement,
    mobile_hint: HtmlElement,
    input: HtmlInputElement,
}

fn element(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.dyn_into()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn text_element(doc: &Document, tag: &str, class: &str, text: &str) -> Result<HtmlElement, JsValue> {
    let el = element(doc, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

impl Surface {
    /// Build the tree inside the element with id `root_id`, creating that
    /// element under `<body>` when the page does not provide one.
    pub fn mount(doc: &Document, root_id: &str) -> Result<Self, JsValue> {
        let (root, root_created) = match doc.get_element_by_id(root_id) {
            Some(el) => (el.dyn_into::<HtmlElement>()?, false),
            None => {
                let body = doc.body().ok_or_else(|| JsValue::from_str("no document body"))?;
                let el = element(doc, "div", "")?;
                el.set_id(root_id);
                body.append_child(&el)?;
                (el, true)
            }
        };

        let container = element(doc, "div", "app-container")?;

        let title = element(doc, "div", "title-container")?;
        let heading = text_element(doc, "h1", "main-title", render::TITLE)?;
        let subtitle = text_element(doc, "p", "subtitle", render::SUBTITLE)?;
        title.append_child(&heading)?;
        title.append_child(&subtitle)?;
        container.append_child(&title)?;

        let game_area = element(doc, "div", "game-area")?;
        game_area.set_attribute("role", "application")?;
        game_area.set_attribute("aria-label", render::GAME_AREA_LABEL)?;

        let key_display = element(doc, "div", CLASS_KEY_DISPLAY)?;
        key_display.set_attribute("aria-live", "polite")?;
        key_display.set_hidden(true);
        game_area.append_child(&key_display)?;

        let mascot_display = element(doc, "div", CLASS_MASCOT_DISPLAY)?;
        mascot_display.set_hidden(true);
        let mascot = element(doc, "div", CLASS_MASCOT)?;
        let mascot_image: HtmlImageElement = doc.create_element("img")?.dyn_into()?;
        mascot_image.set_class_name(CLASS_MASCOT_IMAGE);
        let mascot_name = element(doc, "p", CLASS_MASCOT_NAME)?;
        mascot.append_child(&mascot_image)?;
        mascot.append_child(&mascot_name)?;
        mascot_display.append_child(&mascot)?;
        game_area.append_child(&mascot_display)?;
        container.append_child(&game_area)?;

        let mobile_panel = element(doc, "div", "mobile-controls")?;
        mobile_panel.set_hidden(true);
        let mobile_button = text_element(doc, "button", "keyboard-button", render::KEYBOARD_BUTTON_LABEL)?;
        mobile_button.set_attribute("type", "button")?;
        let mobile_hint = element(doc, "p", "keyboard-hint")?;
        mobile_panel.append_child(&mobile_button)?;
        mobile_panel.append_child(&mobile_hint)?;
        container.append_child(&mobile_panel)?;

        let instructions = element(doc, "div", "instruction-container")?;
        let instruction_title = text_element(doc, "h2", "instruction-title", render::INSTRUCTION_TITLE)?;
        instructions.append_child(&instruction_title)?;
        let list = element(doc, "ul", "instruction-list")?;
        for (badge, text, modifier) in render::INSTRUCTIONS {
            let item = element(doc, "li", "instruction-item")?;
            let badge_class = if modifier.is_empty() {
                "instruction-badge".to_string()
            } else {
                format!("instruction-badge {}", modifier)
            };
            let badge_el = text_element(doc, "span", &badge_class, badge)?;
            let text_el = text_element(doc, "span", "instruction-text", text)?;
            item.append_child(&badge_el)?;
            item.append_child(&text_el)?;
            list.append_child(&item)?;
        }
        instructions.append_child(&list)?;
        container.append_child(&instructions)?;

        let input: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
        input.set_id(MOBILE_INPUT_ID);
        input.set_type("text");
        // only ever focused programmatically, never by Tab
        input.set_attribute("tabindex", "-1")?;
        input.set_attribute("autocomplete", "off")?;
        input.set_attribute("autocapitalize", "off")?;
        input.set_attribute("autocorrect", "off")?;
        input.set_attribute("aria-label", render::KEYBOARD_BUTTON_LABEL)?;
        input.set_attribute("style", HIDDEN_INPUT_STYLE)?;
        container.append_child(&input)?;

        root.append_child(&container)?;

        Ok(Self {
            root,
            root_created,
            container,
            game_area,
            key_display,
            mascot_display,
            mascot_image,
            mascot_name,
            mobile_panel,
            mobile_button,
            mobile_hint,
            input,
        })
    }

    pub fn game_area(&self) -> &HtmlElement {
        &self.game_area
    }

    pub fn mobile_button(&self) -> &HtmlElement {
        &self.mobile_button
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn apply(&self, frame: &Frame) -> Result<(), JsValue> {
        self.container
            .set_attribute("style", &format!("background-color:{};", frame.background))?;

        match &frame.glyph {
            Some(glyph) => {
                self.key_display.set_text_content(Some(&glyph.text));
                self.key_display
                    .set_class_name(&render::class_list(CLASS_KEY_DISPLAY, glyph.animated));
                self.key_display
                    .set_attribute("style", &format!("color:{};", glyph.color))?;
                self.key_display.set_hidden(false);
            }
            None => {
                self.key_display.set_text_content(None);
                self.key_display.set_hidden(true);
            }
        }

        match &frame.mascot {
            Some(m) => {
                self.mascot_display
                    .set_class_name(&render::class_list(CLASS_MASCOT_DISPLAY, m.animated));
                self.mascot_display.set_attribute("style", &m.wrapper_style())?;
                if self.mascot_image.get_attribute("src").as_deref() != Some(m.image) {
                    self.mascot_image.set_src(m.image);
                }
                self.mascot_image.set_alt(m.label);
                self.mascot_image.set_attribute("style", &m.image_style())?;
                self.mascot_name.set_text_content(Some(m.label));
                self.mascot_display.set_hidden(false);
            }
            None => self.mascot_display.set_hidden(true),
        }

        match &frame.mobile {
            Some(panel) => {
                self.mobile_button.set_text_content(Some(panel.button_label));
                self.mobile_button.set_attribute(
                    "aria-pressed",
                    if panel.keyboard_open { "true" } else { "false" },
                )?;
                self.mobile_hint.set_text_content(Some(panel.hint));
                self.mobile_panel.set_hidden(false);
            }
            None => self.mobile_panel.set_hidden(true),
        }
        Ok(())
    }

    pub fn unmount(&self) {
        self.container.remove();
        if self.root_created {
            self.root.remove();
        }
    }
}

/// True when `target` is the very same node as `el`.
pub fn is_target(target: &EventTarget, el: &impl AsRef<JsValue>) -> bool {
    let target: &JsValue = target.as_ref();
    target == el.as_ref()
}

/// Empty the hidden input. Silently skipped once the input has left the page.
pub fn clear_input(input: &HtmlInputElement) {
    if input.is_connected() {
        input.set_value("");
    }
}

pub fn blur_input(input: &HtmlInputElement) {
    if !input.is_connected() {
        return;
    }
    if let Err(e) = input.blur() {
        log::warn!("could not blur mobile input: {:?}", e);
    }
}

pub fn focus_input(input: &HtmlInputElement) {
    if !input.is_connected() {
        return;
    }
    if let Err(e) = input.focus() {
        log::warn!("could not focus mobile input: {:?}", e);
    }
}
