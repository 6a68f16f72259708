//! Tone descriptions and PCM synthesis for the board's sound cues.

use std::f32::consts::TAU;
use std::time::Duration;

/// Gain a tone decays to by the end of its duration
const DECAY_FLOOR: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Oscillator output for a phase in `[0, 1)`
    fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
            Waveform::Triangle => {
                if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                }
            }
        }
    }
}

/// A single fixed-frequency tone with an exponential decay
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub waveform: Waveform,
    /// Starting gain, 0..=1
    pub volume: f32,
}

impl Tone {
    const fn new(frequency_hz: f32, duration_ms: u64, waveform: Waveform, volume: f32) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
            waveform,
            volume,
        }
    }

    fn gain_at(&self, t: f32) -> f32 {
        let duration = self.duration.as_secs_f32();
        if duration <= 0.0 || self.volume <= DECAY_FLOOR {
            return self.volume;
        }
        self.volume * (DECAY_FLOOR / self.volume).powf(t / duration)
    }
}

/// A tone placed at an offset from the start of its cue
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledTone {
    pub offset: Duration,
    pub tone: Tone,
}

const fn at(offset_ms: u64, tone: Tone) -> ScheduledTone {
    ScheduledTone {
        offset: Duration::from_millis(offset_ms),
        tone,
    }
}

const MOVE_TONES: [ScheduledTone; 1] = [at(0, Tone::new(600.0, 80, Waveform::Sine, 0.2))];

const CAPTURE_TONES: [ScheduledTone; 2] = [
    at(0, Tone::new(400.0, 100, Waveform::Triangle, 0.3)),
    at(50, Tone::new(300.0, 80, Waveform::Triangle, 0.2)),
];

const CHECK_TONES: [ScheduledTone; 2] = [
    at(0, Tone::new(800.0, 150, Waveform::Square, 0.2)),
    at(100, Tone::new(600.0, 100, Waveform::Square, 0.15)),
];

const GAME_OVER_TONES: [ScheduledTone; 3] = [
    at(0, Tone::new(523.0, 200, Waveform::Sine, 0.3)),
    at(150, Tone::new(659.0, 200, Waveform::Sine, 0.3)),
    at(300, Tone::new(784.0, 300, Waveform::Sine, 0.3)),
];

const ILLEGAL_TONES: [ScheduledTone; 1] = [at(0, Tone::new(200.0, 100, Waveform::Sawtooth, 0.15))];

/// The sounds the board can make
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Move,
    Capture,
    Check,
    GameOver,
    Illegal,
}

impl SoundCue {
    pub fn tones(self) -> &'static [ScheduledTone] {
        match self {
            SoundCue::Move => &MOVE_TONES,
            SoundCue::Capture => &CAPTURE_TONES,
            SoundCue::Check => &CHECK_TONES,
            SoundCue::GameOver => &GAME_OVER_TONES,
            SoundCue::Illegal => &ILLEGAL_TONES,
        }
    }

    /// Time from the first tone starting to the last one ending
    pub fn duration(self) -> Duration {
        self.tones()
            .iter()
            .map(|scheduled| scheduled.offset + scheduled.tone.duration)
            .max()
            .unwrap_or_default()
    }
}

fn sample_count(duration: Duration, sample_rate: u32) -> usize {
    (duration.as_secs_f64() * f64::from(sample_rate)).round() as usize
}

/// Mix all tones of a cue into one mono buffer
pub fn render_cue(cue: SoundCue, sample_rate: u32, master_volume: f32) -> Vec<f32> {
    let master_volume = master_volume.clamp(0.0, 1.0);
    let mut samples = vec![0.0f32; sample_count(cue.duration(), sample_rate)];

    for scheduled in cue.tones() {
        let tone = &scheduled.tone;
        let start = sample_count(scheduled.offset, sample_rate);
        let len = sample_count(tone.duration, sample_rate);
        let end = (start + len).min(samples.len());

        for (i, out) in samples[start..end].iter_mut().enumerate() {
            let t = i as f32 / sample_rate as f32;
            let phase = (t * tone.frequency_hz).fract();
            *out += tone.waveform.sample(phase) * tone.gain_at(t);
        }
    }

    for sample in &mut samples {
        *sample = (*sample * master_volume).clamp(-1.0, 1.0);
    }
    samples
}
