use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

/// Unmuted narration volume ceiling.
pub const BASE_VOLUME: f32 = 0.8;
/// Fade-out ramp: one step per tick, 0.8 -> 0.0 in exactly two seconds.
pub const FADE_TICK: Duration = Duration::from_millis(100);
pub const FADE_STEP: f32 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    NotStarted,
    Playing,
    Paused,
}

struct AudioOutput {
    // Dropping the stream kills the sink; keep it alive for the app's life.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

struct Fade {
    started: Instant,
    applied_steps: u32,
}

/// The single shared audio transport. All playback state mutation funnels
/// through these operations; slides and chrome never touch fields directly.
pub struct Transport {
    state: TransportState,
    muted: bool,
    /// Terminal slide reached while playing: controls swap Pause for Restart.
    ended: bool,
    fade: Option<Fade>,
    /// Narration file; `None` runs the transport silently with full state
    /// semantics (tests, `--no-audio`, missing asset).
    source: Option<PathBuf>,
    audio: Option<AudioOutput>,
    volume: f32,
}

/// Volume after `steps` fade decrements from `base`.
fn faded_volume(base: f32, steps: u32) -> f32 {
    (base - FADE_STEP * steps as f32).max(0.0)
}

impl Transport {
    pub fn new(source: Option<PathBuf>, volume: f32) -> Self {
        Self {
            state: TransportState::NotStarted,
            muted: false,
            ended: false,
            fade: None,
            source,
            audio: None,
            volume: volume.clamp(0.0, BASE_VOLUME),
        }
    }

    /// A transport with no audio backend at all.
    pub fn silent() -> Self {
        Self::new(None, BASE_VOLUME)
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn started(&self) -> bool {
        self.state != TransportState::NotStarted
    }

    pub fn playing(&self) -> bool {
        self.state == TransportState::Playing
    }

    pub fn paused(&self) -> bool {
        self.state == TransportState::Paused
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Volume currently applied to the sink.
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            return 0.0;
        }
        match &self.fade {
            Some(fade) => faded_volume(self.volume, fade.applied_steps),
            None => self.volume,
        }
    }

    /// Begin playback. Legal only from `NotStarted`; illegal calls are
    /// dropped. Audio failure (no device, missing/undecodable file) leaves
    /// the state untouched so pressing Start again retries.
    pub fn start(&mut self) -> Result<()> {
        if self.state != TransportState::NotStarted {
            return Ok(());
        }
        self.open_narration()?;
        self.state = TransportState::Playing;
        log::debug!("transport: started");
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state != TransportState::Playing {
            return;
        }
        if let Some(sink) = self.sink() {
            sink.pause();
        }
        self.state = TransportState::Paused;
        log::debug!("transport: paused");
    }

    pub fn resume(&mut self) {
        if self.state != TransportState::Paused {
            return;
        }
        if let Some(sink) = self.sink() {
            sink.play();
        }
        self.state = TransportState::Playing;
        log::debug!("transport: resumed");
    }

    /// Reset to `NotStarted` from any state. The caller navigates to slide 1.
    pub fn stop(&mut self) {
        if let Some(audio) = &mut self.audio {
            if let Some(sink) = audio.sink.take() {
                sink.stop();
            }
        }
        self.state = TransportState::NotStarted;
        self.ended = false;
        self.fade = None;
        log::debug!("transport: stopped");
    }

    /// The Start affordance at the terminal slide: rewind the narration to
    /// zero and play again. The caller navigates to slide 1.
    pub fn restart(&mut self) -> Result<()> {
        if let Some(audio) = &mut self.audio {
            if let Some(sink) = audio.sink.take() {
                sink.stop();
            }
        }
        self.fade = None;
        self.ended = false;
        self.open_narration()?;
        self.state = TransportState::Playing;
        log::debug!("transport: restarted");
        Ok(())
    }

    /// Independent of transport state; flips the effective volume between
    /// zero and the unmuted baseline.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.apply_volume();
        log::debug!("transport: muted={}", self.muted);
    }

    /// Note that the terminal slide has been reached while playing.
    pub fn mark_ended(&mut self) {
        if self.state == TransportState::Playing {
            self.ended = true;
        }
    }

    /// Navigating back off the terminal slide restores normal controls.
    pub fn clear_ended(&mut self) {
        self.ended = false;
    }

    /// Start the two-second narration fade-out. Idempotent.
    pub fn begin_fade(&mut self, now: Instant) {
        if self.fade.is_none() && self.state == TransportState::Playing {
            self.fade = Some(Fade {
                started: now,
                applied_steps: 0,
            });
            log::debug!("transport: fade-out begins");
        }
    }

    /// Advance the fade ramp. Called once per frame; decrements are applied
    /// on the fixed tick schedule, not per frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(fade) = &mut self.fade else { return };
        let due = (now.saturating_duration_since(fade.started).as_millis()
            / FADE_TICK.as_millis()) as u32;
        if due <= fade.applied_steps {
            return;
        }
        fade.applied_steps = due;
        let volume = faded_volume(self.volume, due);
        self.apply_volume();
        if volume <= 0.0 {
            if let Some(sink) = self.sink() {
                sink.pause();
            }
            log::debug!("transport: fade-out complete");
        }
    }

    fn sink(&self) -> Option<&Sink> {
        self.audio.as_ref().and_then(|a| a.sink.as_ref())
    }

    fn apply_volume(&self) {
        let volume = self.effective_volume();
        if let Some(sink) = self.sink() {
            sink.set_volume(volume);
        }
    }

    /// Open the output device (once) and queue the narration from the top.
    /// No-op for a silent transport.
    fn open_narration(&mut self) -> Result<()> {
        let Some(path) = self.source.clone() else {
            return Ok(());
        };
        if self.audio.is_none() {
            let (stream, handle) =
                OutputStream::try_default().context("no audio output device")?;
            self.audio = Some(AudioOutput {
                _stream: stream,
                handle,
                sink: None,
            });
        }
        let Some(audio) = self.audio.as_mut() else {
            return Ok(());
        };
        match &audio.sink {
            Some(sink) => sink.play(),
            None => {
                let sink = Sink::try_new(&audio.handle).context("audio sink")?;
                let file = File::open(&path)
                    .with_context(|| format!("open narration {}", path.display()))?;
                let decoder = Decoder::new(BufReader::new(file))
                    .with_context(|| format!("decode narration {}", path.display()))?;
                sink.append(decoder);
                audio.sink = Some(sink);
            }
        }
        self.apply_volume();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> Transport {
        Transport::silent()
    }

    #[test]
    fn only_start_leaves_not_started() {
        let mut t = transport();
        t.pause();
        assert_eq!(t.state(), TransportState::NotStarted);
        t.resume();
        assert_eq!(t.state(), TransportState::NotStarted);
        t.start().unwrap();
        assert_eq!(t.state(), TransportState::Playing);
    }

    #[test]
    fn playing_pauses_and_paused_resumes() {
        let mut t = transport();
        t.start().unwrap();
        t.start().unwrap(); // illegal; dropped
        assert_eq!(t.state(), TransportState::Playing);
        t.pause();
        assert_eq!(t.state(), TransportState::Paused);
        t.pause(); // illegal; dropped
        assert_eq!(t.state(), TransportState::Paused);
        t.resume();
        assert_eq!(t.state(), TransportState::Playing);
    }

    #[test]
    fn stop_is_legal_from_every_state() {
        let mut t = transport();
        t.stop();
        assert_eq!(t.state(), TransportState::NotStarted);
        t.start().unwrap();
        t.stop();
        assert_eq!(t.state(), TransportState::NotStarted);
        t.start().unwrap();
        t.pause();
        t.stop();
        assert_eq!(t.state(), TransportState::NotStarted);
    }

    #[test]
    fn double_mute_restores_the_original_volume() {
        let mut t = transport();
        t.start().unwrap();
        let before = t.effective_volume();
        assert_eq!(before, BASE_VOLUME);
        t.toggle_mute();
        assert!(t.muted());
        assert_eq!(t.effective_volume(), 0.0);
        t.toggle_mute();
        assert!(!t.muted());
        assert_eq!(t.effective_volume(), before);
    }

    #[test]
    fn mute_is_independent_of_transport_state() {
        let mut t = transport();
        t.toggle_mute();
        assert!(t.muted());
        t.start().unwrap();
        assert!(t.muted());
        assert_eq!(t.effective_volume(), 0.0);
    }

    #[test]
    fn ended_only_registers_while_playing() {
        let mut t = transport();
        t.mark_ended();
        assert!(!t.ended());
        t.start().unwrap();
        t.mark_ended();
        assert!(t.ended());
        t.clear_ended();
        assert!(!t.ended());
    }

    #[test]
    fn restart_clears_ended_and_fade() {
        let now = Instant::now();
        let mut t = transport();
        t.start().unwrap();
        t.mark_ended();
        t.begin_fade(now);
        assert!(t.fading());
        t.restart().unwrap();
        assert!(!t.ended());
        assert!(!t.fading());
        assert_eq!(t.state(), TransportState::Playing);
        assert_eq!(t.effective_volume(), BASE_VOLUME);
    }

    #[test]
    fn fade_ramp_reaches_silence_in_two_seconds() {
        let t0 = Instant::now();
        let mut t = transport();
        t.start().unwrap();
        t.begin_fade(t0);
        assert_eq!(t.effective_volume(), BASE_VOLUME);

        t.tick(t0 + Duration::from_millis(100));
        assert!((t.effective_volume() - (BASE_VOLUME - FADE_STEP)).abs() < 1e-6);

        t.tick(t0 + Duration::from_millis(1000));
        assert!((t.effective_volume() - (BASE_VOLUME - FADE_STEP * 10.0)).abs() < 1e-6);

        t.tick(t0 + Duration::from_millis(2000));
        assert_eq!(t.effective_volume(), 0.0);

        // Past the end of the ramp the volume stays pinned at zero.
        t.tick(t0 + Duration::from_millis(5000));
        assert_eq!(t.effective_volume(), 0.0);
    }

    #[test]
    fn fade_requires_playing() {
        let now = Instant::now();
        let mut t = transport();
        t.begin_fade(now);
        assert!(!t.fading());
    }

    #[test]
    fn faded_volume_never_goes_negative() {
        assert_eq!(faded_volume(0.8, 0), 0.8);
        assert_eq!(faded_volume(0.8, 20), 0.0);
        assert_eq!(faded_volume(0.8, 1000), 0.0);
    }
}
