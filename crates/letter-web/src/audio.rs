use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AudioContext, AudioParam, BiquadFilterType, OscillatorType};
use letter_engine::{Sweep, ToneSpec, ToneSynth, Waveform};

/// Constructors tried in order; older Safari only ships the prefixed one.
const CONTEXT_CONSTRUCTORS: [&str; 2] = ["AudioContext", "webkitAudioContext"];

/// [`ToneSynth`] over the Web Audio API.
#[derive(Default)]
pub struct WebAudioSynth {
    context: Option<AudioContext>,
}

impl WebAudioSynth {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToneSynth for WebAudioSynth {
    fn probe(&mut self) -> bool {
        if self.context.is_none() {
            self.context = create_context();
        }
        if let Some(ctx) = &self.context {
            if let Err(err) = ctx.resume() {
                log::debug!("audio context not resumed: {:?}", err);
            }
        }
        self.context.is_some()
    }

    fn play(&mut self, tone: &ToneSpec) {
        let Some(ctx) = &self.context else {
            return;
        };
        if let Err(err) = schedule_tone(ctx, tone) {
            log::debug!("tone not played: {:?}", err);
        }
    }
}

fn create_context() -> Option<AudioContext> {
    let window = web_sys::window()?;
    for name in CONTEXT_CONSTRUCTORS {
        let Ok(ctor) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) else {
            continue;
        };
        let Some(ctor) = ctor.dyn_ref::<js_sys::Function>() else {
            continue;
        };
        if let Ok(ctx) = js_sys::Reflect::construct(ctor, &js_sys::Array::new()) {
            return Some(ctx.unchecked_into());
        }
    }
    None
}

/// Oscillator -> [lowpass] -> gain -> destination, all ramps starting now.
fn schedule_tone(ctx: &AudioContext, tone: &ToneSpec) -> Result<(), JsValue> {
    let start = ctx.current_time();
    let end = start + tone.duration as f64;

    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    osc.set_type(match tone.waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    });
    ramp(&osc.frequency(), tone.frequency, start, end)?;
    ramp(&gain.gain(), tone.gain, start, end)?;

    match tone.lowpass {
        Some(cutoff) => {
            let filter = ctx.create_biquad_filter()?;
            filter.set_type(BiquadFilterType::Lowpass);
            ramp(&filter.frequency(), cutoff, start, end)?;
            osc.connect_with_audio_node(&filter)?;
            filter.connect_with_audio_node(&gain)?;
        }
        None => {
            osc.connect_with_audio_node(&gain)?;
        }
    }
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.start_with_when(start)?;
    osc.stop_with_when(end)?;
    Ok(())
}

fn ramp(param: &AudioParam, sweep: Sweep, start: f64, end: f64) -> Result<(), JsValue> {
    param.set_value_at_time(sweep.start, start)?;
    param.exponential_ramp_to_value_at_time(sweep.end, end)?;
    Ok(())
}
