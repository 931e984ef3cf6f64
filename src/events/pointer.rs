use super::Listener;
use crate::dom;
use cursor_core::{EventQueue, InteractiveMatcher, PointerEvent};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward pointer input into `queue`; the frame loop drains it.
pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    queue: &EventQueue,
    matcher: Rc<InteractiveMatcher>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();

    let q = queue.clone();
    listeners.extend(Listener::attach(window, "pointermove", move |ev| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            q.push(PointerEvent::Move {
                x: pe.client_x() as f32,
                y: pe.client_y() as f32,
            });
        }
    }));

    let q = queue.clone();
    listeners.extend(Listener::attach(document, "mouseover", move |ev| {
        let interactive = dom::event_element(&ev)
            .map(|el| matcher.is_interactive(&el))
            .unwrap_or(false);
        q.push(PointerEvent::Enter { interactive });
    }));

    let q = queue.clone();
    listeners.extend(Listener::attach(document, "mouseout", move |_ev| {
        q.push(PointerEvent::Leave);
    }));

    let q = queue.clone();
    listeners.extend(Listener::attach(window, "pointerdown", move |_ev| {
        q.push(PointerEvent::Down);
    }));

    let q = queue.clone();
    listeners.extend(Listener::attach(window, "pointerup", move |_ev| {
        q.push(PointerEvent::Up);
    }));

    log::info!("[cursor] wired {} pointer listeners", listeners.len());
    listeners
}
