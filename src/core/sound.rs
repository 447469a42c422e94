// UI sound effects: tone parameters and the lazily created synthesis sink.
//
// Every tone is a single sine oscillator whose frequency and gain follow
// exponential ramps from a start value to an end value over the tone's
// duration. The sink (an audio context on the web) is created on the first
// request and reused for every later one.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToneKind {
    Tick,
    Hover,
    Click,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_sec: f64,
    pub start_gain: f32,
    pub end_gain: f32,
}

// Exponential ramps cannot reach zero; tones decay to this floor instead.
pub const GAIN_FLOOR: f32 = 0.001;

impl ToneKind {
    pub const ALL: [ToneKind; 3] = [ToneKind::Tick, ToneKind::Hover, ToneKind::Click];

    pub fn spec(self) -> ToneSpec {
        match self {
            // very subtle, used for global pointer feedback
            ToneKind::Tick => ToneSpec {
                start_hz: 1200.0,
                end_hz: 100.0,
                duration_sec: 0.05,
                start_gain: 0.02,
                end_gain: GAIN_FLOOR,
            },
            ToneKind::Hover => ToneSpec {
                start_hz: 600.0,
                end_hz: 800.0,
                duration_sec: 0.1,
                start_gain: 0.03,
                end_gain: GAIN_FLOOR,
            },
            ToneKind::Click => ToneSpec {
                start_hz: 200.0,
                end_hz: 50.0,
                duration_sec: 0.15,
                start_gain: 0.08,
                end_gain: GAIN_FLOOR,
            },
        }
    }
}

#[inline]
fn exp_ramp(from: f32, to: f32, t: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return to;
    }
    let k = (t / duration).clamp(0.0, 1.0) as f32;
    from * (to / from).powf(k)
}

impl ToneSpec {
    /// Oscillator frequency `t` seconds after the tone starts.
    pub fn frequency_at(&self, t: f64) -> f32 {
        exp_ramp(self.start_hz, self.end_hz, t, self.duration_sec)
    }

    /// Envelope gain `t` seconds after the tone starts.
    pub fn gain_at(&self, t: f64) -> f32 {
        exp_ramp(self.start_gain, self.end_gain, t, self.duration_sec)
    }
}

/// Backend that turns a `ToneSpec` into sound.
pub trait ToneSink {
    type Error: std::fmt::Debug;

    fn resume_if_suspended(&self);

    /// Start one independent tone. Overlapping calls must not interfere.
    fn play(&self, tone: &ToneSpec) -> Result<(), Self::Error>;
}

type SinkFactory<S> = Box<dyn FnMut() -> Option<S>>;

/// Lazily constructed shared sink plus the three fire-and-forget triggers.
///
/// If the factory yields nothing (audio unavailable or blocked) the trigger
/// is a silent no-op and construction is attempted again next time.
pub struct SoundBoard<S: ToneSink> {
    sink: Option<S>,
    factory: SinkFactory<S>,
    constructed: u32,
}

impl<S: ToneSink> SoundBoard<S> {
    pub fn new(factory: impl FnMut() -> Option<S> + 'static) -> Self {
        Self {
            sink: None,
            factory: Box::new(factory),
            constructed: 0,
        }
    }

    pub fn tick(&mut self) {
        self.play(ToneKind::Tick);
    }

    pub fn hover(&mut self) {
        self.play(ToneKind::Hover);
    }

    pub fn click(&mut self) {
        self.play(ToneKind::Click);
    }

    pub fn play(&mut self, kind: ToneKind) {
        let Some(sink) = self.ensure_sink() else {
            log::debug!("[audio] no context, {:?} skipped", kind);
            return;
        };
        sink.resume_if_suspended();
        if let Err(e) = sink.play(&kind.spec()) {
            log::debug!("[audio] {:?} failed: {:?}", kind, e);
        }
    }

    /// Number of times the factory has produced a sink.
    pub fn constructed(&self) -> u32 {
        self.constructed
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    fn ensure_sink(&mut self) -> Option<&S> {
        if self.sink.is_none() {
            if let Some(s) = (self.factory)() {
                self.constructed += 1;
                self.sink = Some(s);
            }
        }
        self.sink.as_ref()
    }
}
