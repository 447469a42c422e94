use crate::core::{AdaptivePerformance, Camera, DustField, SceneGroup, SectionId};
use crate::input;
use crate::{dom, page, render};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    pub camera: Camera,
    pub group: SceneGroup,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub page: page::Page,
    pub adaptive: Rc<RefCell<AdaptivePerformance>>,

    pub started: Instant,
    pub last_instant: Instant,
    pub last_section: Option<SectionId>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        let pixel_ratio = {
            let mut adaptive = self.adaptive.borrow_mut();
            if adaptive.record_frame(dt_sec) {
                log::info!("[frame] performance factor -> {:.2}", adaptive.factor());
            }
            adaptive.pixel_ratio(dom::device_pixel_ratio())
        };
        dom::sync_canvas_backing_size(&self.canvas, pixel_ratio);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.camera.set_aspect(w, h);

        let section = {
            let mut scroll = self.page.scroll.borrow_mut();
            scroll.step(dt_sec);
            scroll.section()
        };
        if self.last_section != Some(section) {
            self.last_section = Some(section);
            page::mark_section(&self.document, section);
        }

        let ndc = self.pointer.borrow().ndc;
        self.group.step(ndc, self.camera.viewport_at_target());

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.camera, &self.group, elapsed) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    dust: &DustField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, dust).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    _ = w.request_animation_frame(cb.unchecked_ref());
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
