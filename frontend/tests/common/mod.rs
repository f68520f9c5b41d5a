// Helpers shared by the browser tests.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement};

pub fn mount_point() -> Element {
    let document = document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn find<T: JsCast>(root: &Element, id: &str) -> T {
    root.query_selector(&format!("#{}", id))
        .unwrap()
        .unwrap_or_else(|| panic!("#{} not rendered", id))
        .dyn_into::<T>()
        .unwrap()
}

pub fn input(root: &Element, id: &str) -> HtmlInputElement {
    find(root, id)
}

/// Sets the field's value and fires the `input` event a keystroke would.
pub fn type_into(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

pub fn click(root: &Element, id: &str) {
    find::<HtmlElement>(root, id).click();
}

/// Submits the form the way pressing Enter in a field does.
pub fn request_submit(root: &Element) {
    root.query_selector("form")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap()
        .request_submit()
        .unwrap();
}

pub async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}
