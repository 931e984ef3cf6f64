use super::Listener;
use crate::constants::MAGNETIC_SELECTOR;
use crate::{dom, style};
use cursor_core::{MagneticConfig, MagneticOffset};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `.magnetic` element and its eased offset.
#[derive(Clone)]
pub struct Magnet {
    pub element: web::Element,
    pub offset: Rc<RefCell<MagneticOffset>>,
}

impl Magnet {
    /// Ease one frame and write the transforms. No-op once settled.
    pub fn frame(&self) {
        let mut m = self.offset.borrow_mut();
        if m.is_settled() && m.offset == m.target {
            return;
        }
        if !m.step() {
            // snap so the element ends exactly where it should
            m.offset = m.target;
        }
        dom::set_transform(&self.element, &style::translate(m.offset));
        if let Some(child) = self.element.first_element_child() {
            dom::set_transform(&child, &style::translate(m.content_offset()));
        }
    }
}

impl Magnet {
    /// Put the element and its content back where the page laid them out.
    pub fn reset(&self) {
        self.offset.borrow_mut().reset();
        dom::set_transform(&self.element, "");
        if let Some(child) = self.element.first_element_child() {
            dom::set_transform(&child, "");
        }
    }
}

pub struct MagnetWiring {
    pub magnets: Vec<Magnet>,
    pub listeners: Vec<Listener>,
}

pub fn wire_magnetic_elements(document: &web::Document, config: MagneticConfig) -> MagnetWiring {
    let mut magnets = Vec::new();
    let mut listeners = Vec::new();

    for element in dom::query_all(document, MAGNETIC_SELECTOR) {
        let offset = Rc::new(RefCell::new(MagneticOffset::new(config)));

        let o = offset.clone();
        let el = element.clone();
        listeners.extend(Listener::attach(&element, "mousemove", move |ev| {
            if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
                let pointer = Vec2::new(me.client_x() as f32, me.client_y() as f32);
                o.borrow_mut().on_pointer_move(pointer, dom::bounding_rect(&el));
            }
        }));

        let o = offset.clone();
        listeners.extend(Listener::attach(&element, "mouseleave", move |_ev| {
            o.borrow_mut().on_pointer_leave();
        }));

        magnets.push(Magnet { element, offset });
    }

    if !magnets.is_empty() {
        log::info!("[magnetic] wired {} elements", magnets.len());
    }
    MagnetWiring { magnets, listeners }
}
