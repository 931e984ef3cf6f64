#![cfg(target_arch = "wasm32")]
use cursor_core::{
    Animator, AnimatorConfig, EventQueue, InputCapability, InteractiveMatcher, Layer,
    MagneticConfig, ScrollSpy, OVERRIDE_PREFIX,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod style;

/// Everything a mounted follower owns; dropping it detaches listeners.
struct Mounted {
    frame_loop: frame::FrameLoop,
    document: web::Document,
    layers: Vec<web::HtmlElement>,
    magnets: Vec<events::Magnet>,
    scroll_spy: Rc<RefCell<ScrollSpy>>,
    _listeners: Vec<events::Listener>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

/// Tuning overrides from `data-cursor-*` attributes of `#cursor-root`.
fn load_config(document: &web::Document) -> AnimatorConfig {
    let Some(root) = document.get_element_by_id(constants::ROOT_ELEMENT_ID) else {
        return AnimatorConfig::default();
    };
    let pairs = dom::data_attributes(&root);
    AnimatorConfig::from_prefixed_overrides(
        OVERRIDE_PREFIX,
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    )
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-web starting");

    spawn_local(async move {
        if let Err(e) = mount() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop, detach listeners, remove the layer elements and
/// undo what the page effects wrote into the document.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(m) = mounted {
        m.frame_loop.stop();
        for el in &m.layers {
            el.remove();
        }
        for magnet in &m.magnets {
            magnet.reset();
        }
        events::clear_scroll_spy(&m.document, &m.scroll_spy);
        log::info!("[cursor] unmounted");
    }
}

fn mount() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let mut listeners = Vec::new();
    // Scroll spy and magnetic elements work on touch devices too.
    let scroll = events::wire_scroll_spy(&window, &document);
    listeners.extend(scroll.listener);
    let magnets = events::wire_magnetic_elements(&document, MagneticConfig::default());
    listeners.extend(magnets.listeners);

    let capability = dom::detect_capability(&window);
    let animator = Animator::new(load_config(&document), capability)?;

    let mut layers = Vec::new();
    let queue = EventQueue::new();
    if capability == InputCapability::Pointer {
        for layer in Layer::ALL.into_iter().take(animator.config().layer_count) {
            let el = dom::create_layer_element(&document, constants::LAYER_CLASSES[layer.index()])?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
            layers.push(el);
        }
        listeners.extend(events::wire_pointer_handlers(
            &window,
            &document,
            &queue,
            Rc::new(InteractiveMatcher::default()),
        ));
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator,
        queue,
        layers: layers.clone(),
        magnets: magnets.magnets.clone(),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mounted {
            frame_loop,
            document,
            layers,
            magnets: magnets.magnets,
            scroll_spy: scroll.spy,
            _listeners: listeners,
        })
    });
    log::info!("[cursor] mounted ({:?})", capability);
    Ok(())
}
