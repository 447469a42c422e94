use crate::core::{SoundBoard, ToneSink, ToneSpec};
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Web Audio backend: one oscillator -> gain -> destination chain per tone.
pub struct WebAudioSink {
    ctx: web::AudioContext,
}

impl ToneSink for WebAudioSink {
    type Error = JsValue;

    fn resume_if_suspended(&self) {
        // autoplay policy keeps new contexts suspended until a gesture
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    fn play(&self, tone: &ToneSpec) -> Result<(), JsValue> {
        let osc = web::OscillatorNode::new(&self.ctx)?;
        let gain = web::GainNode::new(&self.ctx)?;
        osc.set_type(web::OscillatorType::Sine);

        let t0 = self.ctx.current_time();
        let t1 = t0 + tone.duration_sec;
        let freq = osc.frequency();
        freq.set_value_at_time(tone.start_hz, t0)?;
        freq.exponential_ramp_to_value_at_time(tone.end_hz, t1)?;
        let level = gain.gain();
        level.set_value_at_time(tone.start_gain, t0)?;
        level.exponential_ramp_to_value_at_time(tone.end_gain, t1)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;
        osc.start()?;
        osc.stop_with_when(t1)?;
        Ok(())
    }
}

fn open_context() -> Option<WebAudioSink> {
    match web::AudioContext::new() {
        Ok(ctx) => {
            log::info!("[audio] context created ({:?})", ctx.state());
            Some(WebAudioSink { ctx })
        }
        Err(e) => {
            log::debug!("[audio] AudioContext unavailable: {:?}", e);
            None
        }
    }
}

thread_local! {
    static SOUNDS: RefCell<SoundBoard<WebAudioSink>> = RefCell::new(SoundBoard::new(open_context));
}

fn with_board(f: impl FnOnce(&mut SoundBoard<WebAudioSink>)) {
    SOUNDS.with(|board| {
        if let Ok(mut b) = board.try_borrow_mut() {
            f(&mut b);
        }
    });
}

pub fn tick() {
    with_board(|b| b.tick());
}

pub fn hover() {
    with_board(|b| b.hover());
}

pub fn click() {
    with_board(|b| b.click());
}
