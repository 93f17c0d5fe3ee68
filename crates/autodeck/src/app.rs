use std::time::{Duration, Instant};

use eframe::egui;

use crate::chrome::{Chrome, ChromeAction};
use crate::deck::{self, FIRST_SLIDE, SLIDE_COUNT};
use crate::input::{InputState, NavIntent};
use crate::render;
use crate::sequencer::{Sequencer, SequencerEvent, SlideClock};
use crate::theme::{mix, Palette};
use crate::transport::Transport;

/// Fixed cross-fade between slides.
const TRANSITION: Duration = Duration::from_millis(500);

/// The outgoing slide, frozen at the moment navigation committed.
struct CrossFade {
    from: usize,
    from_clock: SlideClock,
    started: Instant,
}

impl CrossFade {
    fn progress(&self, now: Instant) -> f32 {
        (now.saturating_duration_since(self.started).as_secs_f32()
            / TRANSITION.as_secs_f32())
        .clamp(0.0, 1.0)
    }
}

pub struct DeckApp {
    current: usize,
    sequencer: Sequencer,
    transition: Option<CrossFade>,
    transport: Transport,
    input: InputState,
    chrome: Chrome,
}

impl DeckApp {
    pub fn new(start_slide: usize, transport: Transport, now: Instant) -> Self {
        let current = start_slide.clamp(FIRST_SLIDE, SLIDE_COUNT);
        let desc = deck::descriptor(current);
        let gate_open = !desc.gated || transport.started();
        let mut transport = transport;
        if current == SLIDE_COUNT {
            transport.mark_ended();
        }
        Self {
            current,
            sequencer: Sequencer::new(desc.script, now, gate_open),
            transition: None,
            transport,
            input: InputState::new(),
            chrome: Chrome::new(now),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn target_of(&self, intent: NavIntent) -> Option<usize> {
        match intent {
            NavIntent::Next if self.current < SLIDE_COUNT => Some(self.current + 1),
            NavIntent::Prev if self.current > FIRST_SLIDE => Some(self.current - 1),
            NavIntent::Jump(n) => Some(n.clamp(FIRST_SLIDE, SLIDE_COUNT)),
            // Next on the last slide and Prev on the first are dropped.
            _ => None,
        }
    }

    /// Commit a navigation. The outgoing sequencer is replaced before
    /// anything else happens, so its pending deadlines die with it.
    pub fn navigate(&mut self, intent: NavIntent, now: Instant) {
        let Some(target) = self.target_of(intent) else {
            return;
        };
        if target == self.current {
            return;
        }
        log::debug!("navigate: {} -> {target}", self.current);

        let from_clock = self.sequencer.clock(now);
        let desc = deck::descriptor(target);
        let gate_open = !desc.gated || self.transport.started();
        self.sequencer = Sequencer::new(desc.script, now, gate_open);

        // A fresh navigation preempts an in-flight fade.
        self.transition = Some(CrossFade {
            from: self.current,
            from_clock,
            started: now,
        });
        self.current = target;

        if target == SLIDE_COUNT {
            self.transport.mark_ended();
        } else {
            self.transport.clear_ended();
        }
    }

    /// One frame of the timing model, independent of the UI so the full
    /// playback chain can run headless.
    pub fn advance_frame(&mut self, now: Instant) {
        self.transport.tick(now);
        if self.transport.started() && !self.sequencer.gate_open() {
            self.sequencer.open_gate(now);
        }
        for event in self.sequencer.tick(now) {
            match event {
                SequencerEvent::Advance => self.navigate(NavIntent::Next, now),
                SequencerEvent::FadeAudio => self.transport.begin_fade(now),
            }
        }
    }

    fn apply(&mut self, action: ChromeAction, now: Instant) {
        match action {
            ChromeAction::Start => {
                // Starting from the terminal slide replays the whole deck.
                if self.current == SLIDE_COUNT {
                    if let Err(err) = self.transport.restart() {
                        log::warn!("audio unavailable: {err:#}");
                    }
                    self.navigate(NavIntent::Jump(FIRST_SLIDE), now);
                } else if let Err(err) = self.transport.start() {
                    log::warn!("audio unavailable: {err:#}");
                }
            }
            ChromeAction::Restart => {
                if let Err(err) = self.transport.restart() {
                    log::warn!("audio unavailable: {err:#}");
                }
                self.navigate(NavIntent::Jump(FIRST_SLIDE), now);
            }
            ChromeAction::Pause => self.transport.pause(),
            ChromeAction::Resume => self.transport.resume(),
            ChromeAction::Stop => {
                self.transport.stop();
                self.navigate(NavIntent::Jump(FIRST_SLIDE), now);
            }
            ChromeAction::ToggleMute => self.transport.toggle_mute(),
            ChromeAction::Go(intent) => self.navigate(intent, now),
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut intents: Vec<NavIntent> = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                intents.push(NavIntent::Next);
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                intents.push(NavIntent::Prev);
            }
            if i.key_pressed(egui::Key::Escape) {
                intents.push(NavIntent::Jump(FIRST_SLIDE));
            }

            // egui's scroll delta is inverted relative to wheel travel:
            // scrolling down reports a negative y.
            let dy = -i.raw_scroll_delta.y;
            if dy != 0.0 {
                if let Some(intent) = self.input.on_wheel(dy, now) {
                    intents.push(intent);
                }
            }

            let height = i.screen_rect().height();
            match i.pointer.hover_pos() {
                Some(pos) => self.input.on_pointer(pos.y, height),
                None => self.input.pointer_left(),
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        // Manual navigation lands even mid-fade; the new commit preempts
        // the running transition with its own.
        for intent in intents {
            self.navigate(intent, now);
        }

        self.advance_frame(now);

        if let Some(t) = &self.transition {
            if t.progress(now) >= 1.0 {
                self.transition = None;
            }
        }

        let palette = Palette::for_slide(self.current);
        let background = match &self.transition {
            Some(t) => mix(
                Palette::for_slide(t.from).background,
                palette.background,
                t.progress(now),
            ),
            None => palette.background,
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                let clock = self.sequencer.clock(now);
                match &self.transition {
                    Some(t) => {
                        let p = t.progress(now);
                        render::slide(
                            painter,
                            rect,
                            t.from,
                            &t.from_clock,
                            &Palette::for_slide(t.from),
                            1.0 - p,
                        );
                        render::slide(painter, rect, self.current, &clock, &palette, p);
                    }
                    None => {
                        render::slide(painter, rect, self.current, &clock, &palette, 1.0);
                    }
                }
            });

        let actions = self.chrome.draw(
            ctx,
            self.current,
            &self.transport,
            self.input.tray_hover(),
            &palette,
            now,
        );
        for action in actions {
            self.apply(action, now);
        }

        // Keep frames coming while anything is animating. Once the terminal
        // slide has settled, egui's own event-driven repaints suffice.
        let settled = self.sequencer.is_finished()
            && self.transition.is_none()
            && !self.transport.fading();
        if !settled {
            ctx.request_repaint();
        }
    }
}

/// Open the window and hand the app to eframe.
pub fn run(start_slide: usize, transport: Transport, windowed: bool) -> anyhow::Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title("autodeck")
        .with_inner_size([1600.0, 900.0]);
    if !windowed {
        viewport = viewport.with_fullscreen(true);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "autodeck",
        options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(start_slide, transport, Instant::now())))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    fn started_app(slide: usize, t0: Instant) -> DeckApp {
        let mut transport = Transport::silent();
        transport.start().unwrap();
        DeckApp::new(slide, transport, t0)
    }

    #[test]
    fn opening_slide_waits_for_start() {
        let t0 = Instant::now();
        let mut app = DeckApp::new(1, Transport::silent(), t0);
        // Without playback the gated timeline never runs.
        for ms in (0..60_000).step_by(500) {
            app.advance_frame(at(t0, ms));
        }
        assert_eq!(app.current(), 1);
    }

    #[test]
    fn full_opening_chain_advances_exactly_once() {
        let t0 = Instant::now();
        let mut app = DeckApp::new(1, Transport::silent(), t0);
        app.apply(ChromeAction::Start, t0);
        // Scripted total is 8420 ms; cross every phase boundary.
        let mut ms = 0;
        while ms < 8_400 {
            app.advance_frame(at(t0, ms));
            assert_eq!(app.current(), 1, "no advance before the script ends");
            ms += 16;
        }
        app.advance_frame(at(t0, 8_430));
        assert_eq!(app.current(), 2);
        // The next slide's own script must restart from zero.
        app.advance_frame(at(t0, 8_500));
        assert_eq!(app.current(), 2);
    }

    #[test]
    fn terminal_slide_fades_audio_and_never_advances() {
        let t0 = Instant::now();
        let mut app = started_app(9, t0);
        assert!(app.transport().ended());
        app.advance_frame(at(t0, 6_900));
        assert!(!app.transport().fading());
        // The epilogue begins 7000 ms in and starts the narration fade.
        app.advance_frame(at(t0, 7_100));
        assert!(app.transport().fading());
        for ms in (7_100..600_000).step_by(1000) {
            app.advance_frame(at(t0, ms));
        }
        assert_eq!(app.current(), 9);
    }

    #[test]
    fn boundary_navigation_is_dropped() {
        let t0 = Instant::now();
        let mut app = started_app(1, t0);
        app.navigate(NavIntent::Prev, t0);
        assert_eq!(app.current(), 1);
        app.navigate(NavIntent::Jump(9), t0);
        app.navigate(NavIntent::Next, at(t0, 100));
        assert_eq!(app.current(), 9);
    }

    #[test]
    fn navigating_away_cancels_the_pending_advance() {
        let t0 = Instant::now();
        let mut app = started_app(3, t0);
        // Jump just before slide 3's 5500 ms deadline.
        app.advance_frame(at(t0, 5_400));
        app.navigate(NavIntent::Jump(6), at(t0, 5_450));
        assert_eq!(app.current(), 6);
        // The old deadline passes; the new slide must not advance for it.
        app.advance_frame(at(t0, 5_600));
        assert_eq!(app.current(), 6);
    }

    #[test]
    fn stop_resets_playback_and_returns_to_the_opening() {
        let t0 = Instant::now();
        let mut app = started_app(5, t0);
        app.apply(ChromeAction::Stop, at(t0, 1_000));
        assert_eq!(app.current(), 1);
        assert!(!app.transport().started());
        // The opening slide is gated again and waits for a fresh start.
        for ms in (1_000..30_000).step_by(500) {
            app.advance_frame(at(t0, ms));
        }
        assert_eq!(app.current(), 1);
    }

    #[test]
    fn restart_from_the_end_returns_to_a_running_slide_one() {
        let t0 = Instant::now();
        let mut app = started_app(9, t0);
        app.advance_frame(at(t0, 8_000));
        assert!(app.transport().fading());
        app.apply(ChromeAction::Restart, at(t0, 8_100));
        assert_eq!(app.current(), 1);
        assert!(app.transport().playing());
        assert!(!app.transport().fading());
        // Slide 1 runs immediately: playback is live, so the gate is open.
        app.advance_frame(at(t0, 8_100 + 8_430));
        assert_eq!(app.current(), 2);
    }

    #[test]
    fn manual_navigation_commits_during_a_cross_fade() {
        let t0 = Instant::now();
        let mut app = started_app(2, t0);
        app.navigate(NavIntent::Next, t0);
        assert_eq!(app.current(), 3);
        // 100 ms in, well inside the 500 ms fade: the keypress still lands
        // and the new commit takes over the transition.
        app.navigate(NavIntent::Next, at(t0, 100));
        assert_eq!(app.current(), 4);
        // Slide 3's 5500 ms deadline died with its sequencer.
        app.advance_frame(at(t0, 100 + 5_600));
        assert_eq!(app.current(), 4);
    }

    #[test]
    fn start_at_the_terminal_slide_replays_from_the_top() {
        let t0 = Instant::now();
        // Opened directly on the last slide, playback never started.
        let mut app = DeckApp::new(9, Transport::silent(), t0);
        assert!(!app.transport().started());
        app.apply(ChromeAction::Start, t0);
        assert_eq!(app.current(), 1);
        assert!(app.transport().playing());
        // Playback is live, so the opening slide runs without a gate.
        app.advance_frame(at(t0, 8_430));
        assert_eq!(app.current(), 2);
    }

    #[test]
    fn jump_targets_are_clamped() {
        let t0 = Instant::now();
        let mut app = started_app(5, t0);
        app.navigate(NavIntent::Jump(40), t0);
        assert_eq!(app.current(), 9);
        app.navigate(NavIntent::Jump(0), at(t0, 100));
        assert_eq!(app.current(), 1);
    }
}
