#![cfg(target_arch = "wasm32")]
use crate::core::{AdaptivePerformance, Camera, DustField, SceneGroup};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod page;
mod render;
mod shell;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Unmount the shell: cancels a pending splash timer and removes the
/// global sound listeners.
#[wasm_bindgen]
pub fn shutdown() {
    if shell::uninstall() {
        log::info!("portfolio-web shut down");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    shell::install(shell::Shell::mount(&window, &document)?);
    let page = page::build(&document)?;

    let adaptive = Rc::new(RefCell::new(AdaptivePerformance::default()));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_pointer_tracking(events::PointerWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        adaptive: adaptive.clone(),
    });

    dom::sync_canvas_backing_size(&canvas, adaptive.borrow().pixel_ratio(dom::device_pixel_ratio()));
    let dust = DustField::random();
    log::info!("[scene] {} dust particles", dust.len());
    let gpu = frame::init_gpu(&canvas, &dust).await;
    if gpu.is_none() {
        log::warn!("[scene] running without a 3D background");
    }

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        canvas,
        document,
        camera: Camera::new(aspect),
        group: SceneGroup::default(),
        pointer,
        page,
        adaptive,
        started: now,
        last_instant: now,
        last_section: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
