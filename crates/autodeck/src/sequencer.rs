use std::time::{Duration, Instant};

/// Side effect applied when a phase is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEffect {
    None,
    /// Begin the narration fade-out ramp (terminal slide epilogue).
    FadeAudio,
}

/// One named step in a slide's animation timeline.
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub name: &'static str,
    pub duration: Duration,
    pub on_enter: PhaseEffect,
}

impl Phase {
    pub const fn new(name: &'static str, millis: u64) -> Self {
        Self {
            name,
            duration: Duration::from_millis(millis),
            on_enter: PhaseEffect::None,
        }
    }

    pub const fn with_effect(name: &'static str, millis: u64, on_enter: PhaseEffect) -> Self {
        Self {
            name,
            duration: Duration::from_millis(millis),
            on_enter,
        }
    }
}

/// What happens when the last phase of a sequence expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Emit a single advance event (auto-advance to the next slide).
    Advance,
    /// Nothing; the slide stays up (final slide).
    Hold,
}

#[derive(Debug, Clone, Copy)]
pub struct PhaseSequence {
    pub phases: &'static [Phase],
    pub terminal: Terminal,
}

impl PhaseSequence {
    /// Total scripted running time of the sequence.
    pub fn total_duration(&self) -> Duration {
        self.phases.iter().map(|p| p.duration).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The terminal phase expired; navigate to the next slide.
    Advance,
    FadeAudio,
}

/// Read-only view of the timeline position, consumed by slide renderers.
#[derive(Debug, Clone, Copy)]
pub struct SlideClock {
    pub phase: &'static str,
    /// Seconds into the current phase.
    pub phase_elapsed: f32,
    /// Seconds since the sequence started running (zero while gated).
    pub since_start: f32,
}

impl SlideClock {
    pub fn zero(phase: &'static str) -> Self {
        Self {
            phase,
            phase_elapsed: 0.0,
            since_start: 0.0,
        }
    }
}

/// Runs a slide's phases in order against wall-clock time.
///
/// The sequencer is owned by the mounted slide: navigating away replaces it,
/// which is the cancellation point. Replacement happens synchronously inside
/// the navigation commit, so a sequencer can never fire for a slide that is
/// no longer displayed.
pub struct Sequencer {
    seq: PhaseSequence,
    current: usize,
    gate_open: bool,
    phase_entered: Instant,
    started: Instant,
    finished: bool,
}

impl Sequencer {
    pub fn new(seq: PhaseSequence, now: Instant, gate_open: bool) -> Self {
        debug_assert!(!seq.phases.is_empty(), "a slide script needs at least one phase");
        Self {
            seq,
            current: 0,
            gate_open,
            phase_entered: now,
            started: now,
            finished: false,
        }
    }

    pub fn gate_open(&self) -> bool {
        self.gate_open
    }

    /// Release a gated sequence; the timeline starts running at `now`.
    pub fn open_gate(&mut self, now: Instant) {
        if !self.gate_open {
            self.gate_open = true;
            self.phase_entered = now;
            self.started = now;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Walk all phases whose deadline has passed. Several phases may expire
    /// within a single tick; phase entry times stay on the scripted schedule
    /// rather than snapping to the tick time.
    pub fn tick(&mut self, now: Instant) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        if !self.gate_open {
            // Hold at the initial phase until the gate opens.
            self.phase_entered = now;
            self.started = now;
            return events;
        }
        while !self.finished {
            let due = self.phase_entered + self.seq.phases[self.current].duration;
            if now < due {
                break;
            }
            if self.current + 1 < self.seq.phases.len() {
                self.current += 1;
                self.phase_entered = due;
                if self.seq.phases[self.current].on_enter == PhaseEffect::FadeAudio {
                    events.push(SequencerEvent::FadeAudio);
                }
            } else {
                self.finished = true;
                if self.seq.terminal == Terminal::Advance {
                    events.push(SequencerEvent::Advance);
                }
            }
        }
        events
    }

    pub fn clock(&self, now: Instant) -> SlideClock {
        let phase = self.seq.phases[self.current].name;
        if !self.gate_open {
            return SlideClock::zero(phase);
        }
        SlideClock {
            phase,
            phase_elapsed: now.saturating_duration_since(self.phase_entered).as_secs_f32(),
            since_start: now.saturating_duration_since(self.started).as_secs_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &[Phase] = &[
        Phase::new("enter", 300),
        Phase::new("build", 1000),
        Phase::new("hold", 700),
    ];

    fn advancing() -> PhaseSequence {
        PhaseSequence {
            phases: SCRIPT,
            terminal: Terminal::Advance,
        }
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn runs_phases_in_order() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(advancing(), t0, true);
        assert_eq!(seq.clock(t0).phase, "enter");
        assert!(seq.tick(at(t0, 299)).is_empty());
        assert!(seq.tick(at(t0, 300)).is_empty());
        assert_eq!(seq.clock(at(t0, 300)).phase, "build");
        assert!(seq.tick(at(t0, 1299)).is_empty());
        assert_eq!(seq.clock(at(t0, 1400)).phase, "hold");
    }

    #[test]
    fn terminal_expiry_emits_exactly_one_advance() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(advancing(), t0, true);
        let events = seq.tick(at(t0, 2000));
        assert_eq!(events, vec![SequencerEvent::Advance]);
        assert!(seq.is_finished());
        // Further ticks stay quiet.
        assert!(seq.tick(at(t0, 10_000)).is_empty());
        assert!(seq.tick(at(t0, 100_000)).is_empty());
    }

    #[test]
    fn catch_up_across_several_phases_in_one_tick() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(advancing(), t0, true);
        // One late tick crosses all three deadlines at once.
        let events = seq.tick(at(t0, 60_000));
        assert_eq!(events, vec![SequencerEvent::Advance]);
    }

    #[test]
    fn hold_terminal_never_advances() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(
            PhaseSequence {
                phases: SCRIPT,
                terminal: Terminal::Hold,
            },
            t0,
            true,
        );
        assert!(seq.tick(at(t0, 3_600_000)).is_empty());
        assert!(seq.is_finished());
    }

    #[test]
    fn gated_sequence_holds_at_initial_phase() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new(advancing(), t0, false);
        assert!(seq.tick(at(t0, 30_000)).is_empty());
        let clock = seq.clock(at(t0, 30_000));
        assert_eq!(clock.phase, "enter");
        assert_eq!(clock.since_start, 0.0);

        // Opening the gate starts the timeline from that moment.
        let open_at = at(t0, 30_000);
        seq.open_gate(open_at);
        assert!(seq.tick(at(t0, 30_299)).is_empty());
        assert!(seq.tick(at(t0, 30_300)).is_empty());
        assert_eq!(seq.clock(at(t0, 30_300)).phase, "build");
        let events = seq.tick(at(t0, 32_000));
        assert_eq!(events, vec![SequencerEvent::Advance]);
    }

    #[test]
    fn fade_effect_fires_on_phase_entry() {
        static EPILOGUE: &[Phase] = &[
            Phase::new("chart", 500),
            Phase::with_effect("epilogue", 600_000, PhaseEffect::FadeAudio),
        ];
        let t0 = Instant::now();
        let mut seq = Sequencer::new(
            PhaseSequence {
                phases: EPILOGUE,
                terminal: Terminal::Hold,
            },
            t0,
            true,
        );
        let events = seq.tick(at(t0, 500));
        assert_eq!(events, vec![SequencerEvent::FadeAudio]);
        // Terminal holds; no advance no matter how long we wait.
        assert!(seq.tick(at(t0, 1_000_000)).is_empty());
    }

    #[test]
    fn replacement_cancels_pending_expiry() {
        // Navigating away replaces the sequencer before its terminal phase
        // fires; the replacement must never see the old slide's events.
        let t0 = Instant::now();
        let mut seq = Sequencer::new(advancing(), t0, true);
        assert!(seq.tick(at(t0, 1500)).is_empty());
        seq = Sequencer::new(advancing(), at(t0, 1500), true);
        // The old terminal deadline (t0+2000) passes without any event.
        assert!(seq.tick(at(t0, 2100)).is_empty());
        assert_eq!(seq.clock(at(t0, 2100)).phase, "build");
    }
}
