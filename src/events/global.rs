use crate::audio;
use crate::core::Throttle;
use crate::dom;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Passive window-level mouse and touch listeners that play the tick sound,
/// rate-limited to one tick per throttle window.
///
/// The returned handles remove the listeners when dropped.
pub fn wire_global_tick(window: &web::Window) -> anyhow::Result<SmallVec<[dom::EventListener; 2]>> {
    let throttle = Rc::new(RefCell::new(Throttle::default()));
    let mut handles = SmallVec::new();
    for kind in ["mousedown", "touchstart"] {
        let throttle = throttle.clone();
        handles.push(dom::EventListener::passive(window, kind, move |_ev| {
            if throttle.borrow_mut().try_fire(dom::now_ms()) {
                audio::tick();
            }
        })?);
    }
    log::info!("[shell] global tick listeners attached");
    Ok(handles)
}
