use crate::constants::{CORE_RGB, GLOW_RGB, LAYER_Z_INDEX, SIZE_TRANSITION};
use crate::dom;
use crate::events::magnetic::Magnet;
use crate::style;
use cursor_core::{Animator, EventQueue};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Animator,
    pub queue: EventQueue,
    /// Layer elements, indexed like `cursor_core::Layer::ALL`.
    pub layers: Vec<web::HtmlElement>,
    pub magnets: Vec<Magnet>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.animator.pump(&mut self.queue);
        let frame = self.animator.tick(dt_sec);

        for lf in &frame.layers {
            if let Some(el) = self.layers.get(lf.layer.index()) {
                let css = style::layer_style(lf, CORE_RGB, GLOW_RGB, LAYER_Z_INDEX, SIZE_TRANSITION);
                dom::set_style(el, &css);
            }
        }

        for magnet in &self.magnets {
            magnet.frame();
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle on the requestAnimationFrame loop; `stop` ends it.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(w), Some(id)) = (web::window(), self.pending.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // break the closure's self-reference so the frame context is released
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let pending = Rc::new(Cell::new(None));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    FrameLoop {
        running,
        pending,
        tick,
    }
}
