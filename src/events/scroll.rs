use super::Listener;
use crate::constants::{ACTIVE_LINK_CLASS, ACTIVE_SECTION_ATTR, SECTION_SELECTOR};
use crate::dom;
use cursor_core::{ScrollSpy, Section};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn collect_sections(document: &web::Document) -> Vec<Section> {
    dom::query_all(document, SECTION_SELECTOR)
        .iter()
        .map(|el| Section::new(el.id(), dom::offset_top(el)))
        .collect()
}

fn unmark_links(document: &web::Document, id: &str) {
    for link in dom::query_all(document, &format!("a[href=\"#{}\"]", id)) {
        _ = link.class_list().remove_1(ACTIVE_LINK_CLASS);
    }
}

fn publish_active(document: &web::Document, previous: Option<&str>, active: Option<&str>) {
    if let Some(prev) = previous {
        unmark_links(document, prev);
    }
    let Some(body) = document.body() else {
        return;
    };
    match active {
        Some(id) => {
            _ = body.set_attribute(ACTIVE_SECTION_ATTR, id);
            for link in dom::query_all(document, &format!("a[href=\"#{}\"]", id)) {
                _ = link.class_list().add_1(ACTIVE_LINK_CLASS);
            }
        }
        None => {
            _ = body.remove_attribute(ACTIVE_SECTION_ATTR);
        }
    }
}

fn refresh(window: &web::Window, document: &web::Document, spy: &RefCell<ScrollSpy>) {
    let sections = collect_sections(document);
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let mut spy = spy.borrow_mut();
    let previous = spy.active().map(str::to_string);
    if spy.update(&sections, scroll_y) {
        log::debug!("[scroll] active section -> {:?}", spy.active());
        publish_active(document, previous.as_deref(), spy.active());
    }
}

/// Scroll spy state shared with its listener.
pub struct ScrollSpyWiring {
    pub spy: Rc<RefCell<ScrollSpy>>,
    pub listener: Option<Listener>,
}

/// Track the active `section[id]` and mark matching `a[href="#id"]` links.
pub fn wire_scroll_spy(window: &web::Window, document: &web::Document) -> ScrollSpyWiring {
    let spy = Rc::new(RefCell::new(ScrollSpy::default()));
    refresh(window, document, &spy);

    let w = window.clone();
    let d = document.clone();
    let s = spy.clone();
    let listener = Listener::attach_passive(window, "scroll", move |_ev| {
        refresh(&w, &d, &s);
    });
    ScrollSpyWiring { spy, listener }
}

/// Drop the published active section: body attribute and link classes.
pub fn clear_scroll_spy(document: &web::Document, spy: &RefCell<ScrollSpy>) {
    let previous = spy.borrow_mut().reset();
    publish_active(document, previous.as_deref(), None);
}
