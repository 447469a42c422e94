use crate::core::AdaptivePerformance;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub adaptive: Rc<RefCell<AdaptivePerformance>>,
}

/// Track the pointer for camera parallax.
///
/// Listens on the window because the scroll overlay sits above the canvas.
/// Updates are dropped while the renderer is running at reduced resolution.
pub fn wire_pointer_tracking(w: PointerWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.adaptive.borrow().events_enabled() {
            return;
        }
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        if ndc.is_finite() {
            w.pointer.borrow_mut().ndc = ndc.clamp(glam::Vec2::splat(-1.0), glam::Vec2::splat(1.0));
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
