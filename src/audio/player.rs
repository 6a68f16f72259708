//! Fire-and-forget sound playback.
//!
//! Architecture:
//! - The output device lives on its own OS thread (it is not `Send`)
//! - Requests travel over a channel by value; nothing is shared with the game
//! - Delayed cues are scheduled on the mixer, not with UI timers

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Source};
use tracing::{debug, warn};

use crate::audio::tone::{SoundCue, render_cue};

/// Output sample rate for synthesized cues
const SAMPLE_RATE: u32 = 44_100;

/// Something that can play sound cues.
///
/// Playback is fire-and-forget: there is no result and no error channel.
pub trait SoundSink {
    /// Play `cue` once `delay` has elapsed
    fn play(&mut self, cue: SoundCue, delay: Duration);
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

#[derive(Debug)]
struct PlayRequest {
    cue: SoundCue,
    delay: Duration,
    volume: f32,
}

/// Plays cues on the default audio output
pub struct SoundPlayer {
    /// Channel to the audio thread (None if it could not be started)
    sender: Option<Sender<PlayRequest>>,
    enabled: bool,
    master_volume: f32,
}

impl SoundPlayer {
    /// Start the audio thread
    pub fn spawn(enabled: bool, master_volume: f32) -> Self {
        let (tx, rx) = mpsc::channel::<PlayRequest>();
        let sender = match thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || run_audio_thread(rx))
        {
            Ok(_) => Some(tx),
            Err(err) => {
                warn!(%err, "failed to start audio thread, sounds disabled");
                None
            }
        };

        Self {
            sender,
            enabled,
            master_volume: master_volume.clamp(0.0, 1.0),
        }
    }
}

impl SoundSink for SoundPlayer {
    fn play(&mut self, cue: SoundCue, delay: Duration) {
        if !self.enabled {
            return;
        }
        if let Some(tx) = &self.sender {
            let _ = tx.send(PlayRequest {
                cue,
                delay,
                volume: self.master_volume,
            });
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

fn open_output() -> anyhow::Result<(OutputStream, OutputStreamHandle)> {
    OutputStream::try_default().context("failed to open default audio output")
}

/// Audio thread body: render each request and hand it to the mixer
fn run_audio_thread(rx: Receiver<PlayRequest>) {
    let (_stream, handle) = match open_output() {
        Ok(output) => output,
        Err(err) => {
            warn!("{err:#}; sounds will be skipped");
            // Keep draining so senders never notice
            for _ in rx {}
            return;
        }
    };

    // Ends when the SoundPlayer (and its sender) is dropped
    for request in rx {
        let samples = render_cue(request.cue, SAMPLE_RATE, request.volume);
        let source = SamplesBuffer::new(1, SAMPLE_RATE, samples).delay(request.delay);
        if let Err(err) = handle.play_raw(source) {
            debug!(?request, %err, "failed to play cue");
        }
    }
}
