//! Root shell: the timed splash and the global tick listeners.
//!
//! Both are owned by `Shell`; dropping it clears the pending timer and
//! detaches the listeners.

use crate::core::{Splash, SplashEvent};
use crate::{dom, events, overlay};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Shell {
    splash: Rc<RefCell<Splash>>,
    _splash_timer: dom::Timeout,
    _listeners: SmallVec<[dom::EventListener; 2]>,
}

impl Shell {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        overlay::show(document);
        let splash = Rc::new(RefCell::new(Splash::new(dom::now_ms())));

        let splash_tick = splash.clone();
        let doc = document.clone();
        let delay = splash.borrow().delay_ms().ceil() as i32;
        let splash_timer = dom::Timeout::schedule(delay, move || {
            let now = dom::now_ms();
            let mut s = splash_tick.borrow_mut();
            match s.poll(now) {
                Some(SplashEvent::Dismissed) => {
                    overlay::hide(&doc);
                    log::info!("[splash] dismissed");
                    None
                }
                // timer fired a hair early against the performance clock
                None if s.is_loading() => Some(s.remaining_ms(now).ceil() as i32 + 1),
                None => None,
            }
        })?;

        let listeners = events::wire_global_tick(window)?;
        log::info!("[splash] shown for {} ms", delay);
        Ok(Self {
            splash,
            _splash_timer: splash_timer,
            _listeners: listeners,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.splash.borrow().is_loading()
    }
}

thread_local! {
    static SHELL: RefCell<Option<Shell>> = const { RefCell::new(None) };
}

pub fn install(shell: Shell) {
    SHELL.with(|s| *s.borrow_mut() = Some(shell));
}

/// Tear the shell down; returns whether one was mounted.
pub fn uninstall() -> bool {
    let shell = SHELL.with(|s| s.borrow_mut().take());
    match shell {
        Some(shell) => {
            if shell.is_loading() {
                log::info!("[splash] torn down before dismissal");
            }
            if let Some(doc) = dom::window_document() {
                if !overlay::is_hidden(&doc) {
                    overlay::hide(&doc);
                }
            }
            true
        }
        None => false,
    }
}
