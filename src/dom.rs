use crate::constants::DATA_ATTR_PREFIX;
use cursor_core::{ElementLike, InputCapability, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `'ontouchstart' in window` means a touch-first device: no follower.
pub fn detect_capability(window: &web::Window) -> InputCapability {
    match js_sys::Reflect::has(window, &"ontouchstart".into()) {
        Ok(true) => InputCapability::TouchOnly,
        _ => InputCapability::Pointer,
    }
}

pub fn create_layer_element(
    document: &web::Document,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?;
    el.set_class_name(class);
    _ = el.set_attribute("aria-hidden", "true");
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}

#[inline]
pub fn bounding_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// `data-*` attributes of `el` as `(key, value)` pairs, prefix stripped.
pub fn data_attributes(el: &web::Element) -> Vec<(String, String)> {
    el.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = name.strip_prefix(DATA_ATTR_PREFIX)?.to_string();
            let value = el.get_attribute(&name)?;
            Some((key, value))
        })
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// DOM element seen through the interactive-element predicate.
pub struct DomElement(pub web::Element);

impl ElementLike for DomElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(DomElement)
    }
}

/// Resolve an event target to an element, if it is one.
#[inline]
pub fn event_element(ev: &web::Event) -> Option<DomElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(DomElement)
}

#[inline]
pub fn set_transform(el: &web::Element, transform: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("transform", transform);
    }
}

/// Document offset of an element, if it is an `HtmlElement`.
#[inline]
pub fn offset_top(el: &web::Element) -> Option<f32> {
    el.dyn_ref::<web::HtmlElement>()
        .map(|html| html.offset_top() as f32)
}
