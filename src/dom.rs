use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the page's monotonic clock.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn element(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn text_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Attach a listener for the lifetime of the page.
#[inline]
pub fn add_listener(target: &web::EventTarget, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Event listener that is removed again when the handle drops.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

type TimeoutCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `setTimeout` handle, cleared on drop.
///
/// The handler returns `Some(delay_ms)` to run again after `delay_ms`, or
/// `None` to finish.
pub struct Timeout {
    id: Rc<Cell<Option<i32>>>,
    callback: TimeoutCallback,
}

impl Timeout {
    pub fn schedule(
        delay_ms: i32,
        mut handler: impl FnMut() -> Option<i32> + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: TimeoutCallback = Rc::new(RefCell::new(None));

        let id_inner = id.clone();
        let callback_inner = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            id_inner.set(None);
            let Some(next_ms) = handler() else {
                return;
            };
            let rearmed = match (web::window(), callback_inner.borrow().as_ref()) {
                (Some(w), Some(cb)) => w
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        next_ms,
                    )
                    .ok(),
                _ => None,
            };
            id_inner.set(rearmed);
        }) as Box<dyn FnMut()>));

        let handle = match callback.borrow().as_ref() {
            Some(cb) => window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    delay_ms,
                )
                .map_err(|e| anyhow::anyhow!("setTimeout: {:?}", e))?,
            None => anyhow::bail!("timeout callback missing"),
        };
        id.set(Some(handle));
        Ok(Self { id, callback })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(handle), Some(w)) = (self.id.take(), web::window()) {
            w.clear_timeout_with_handle(handle);
        }
        // breaks the closure <-> cell cycle
        self.callback.borrow_mut().take();
    }
}

/// Size the canvas backing store to its CSS box times `pixel_ratio`.
/// Returns true when the size changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) -> bool {
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * pixel_ratio) as u32).max(1);
    let h_px = ((rect.height() * pixel_ratio) as u32).max(1);
    if canvas.width() == w_px && canvas.height() == h_px {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}
