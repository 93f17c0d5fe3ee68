//! On-screen controls: the transport tray bottom left, slide navigation
//! bottom center. Everything hides unless the pointer is in the lower third
//! of the window, so the deck stays clean while it plays.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, Context, RichText, Vec2};

use crate::deck::{FIRST_SLIDE, SLIDE_COUNT};
use crate::input::NavIntent;
use crate::theme::Palette;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    Start,
    Restart,
    Pause,
    Resume,
    Stop,
    ToggleMute,
    Go(NavIntent),
}

/// Seconds before the idle hint appears on the opening slide.
const HINT_DELAY: f32 = 3.0;

pub struct Chrome {
    mounted: Instant,
}

impl Chrome {
    pub fn new(now: Instant) -> Self {
        Self { mounted: now }
    }

    pub fn draw(
        &self,
        ctx: &Context,
        current: usize,
        transport: &Transport,
        tray_hover: bool,
        palette: &Palette,
        now: Instant,
    ) -> Vec<ChromeAction> {
        let mut actions = Vec::new();
        let on_last = current == SLIDE_COUNT;

        self.draw_transport(ctx, transport, tray_hover, on_last, palette, &mut actions);
        if tray_hover {
            self.draw_nav(ctx, current, palette, &mut actions);
        }
        if !transport.started() {
            self.draw_hint(ctx, palette, now);
        }
        actions
    }

    fn draw_transport(
        &self,
        ctx: &Context,
        transport: &Transport,
        tray_hover: bool,
        on_last: bool,
        palette: &Palette,
        actions: &mut Vec<ChromeAction>,
    ) {
        egui::Area::new(egui::Id::new("transport-tray"))
            .anchor(Align2::LEFT_BOTTOM, Vec2::new(24.0, -24.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if !transport.started() {
                        if tray_button(ui, "\u{25B6} Start", palette).clicked() {
                            actions.push(ChromeAction::Start);
                        }
                        return;
                    }
                    if on_last && transport.ended() {
                        if tray_hover && tray_button(ui, "\u{21BA} Restart", palette).clicked() {
                            actions.push(ChromeAction::Restart);
                        }
                        return;
                    }
                    // While paused the tray stays up even without hover, so
                    // the resume control cannot be lost.
                    if !(tray_hover || transport.paused()) {
                        return;
                    }
                    if transport.playing() {
                        if tray_button(ui, "\u{23F8} Pause", palette).clicked() {
                            actions.push(ChromeAction::Pause);
                        }
                    } else if tray_button(ui, "\u{25B6} Resume", palette).clicked() {
                        actions.push(ChromeAction::Resume);
                    }
                    if tray_button(ui, "\u{23F9} Stop", palette).clicked() {
                        actions.push(ChromeAction::Stop);
                    }
                    let mute_label = if transport.muted() {
                        "\u{1F507} Unmute"
                    } else {
                        "\u{1F50A} Mute"
                    };
                    if tray_button(ui, mute_label, palette).clicked() {
                        actions.push(ChromeAction::ToggleMute);
                    }
                });
            });
    }

    fn draw_nav(
        &self,
        ctx: &Context,
        current: usize,
        palette: &Palette,
        actions: &mut Vec<ChromeAction>,
    ) {
        egui::Area::new(egui::Id::new("slide-nav"))
            .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -24.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let at_first = current == FIRST_SLIDE;
                    let at_last = current == SLIDE_COUNT;
                    if ui
                        .add_enabled(!at_first, egui::Button::new("\u{2190}"))
                        .clicked()
                    {
                        actions.push(ChromeAction::Go(NavIntent::Prev));
                    }
                    for n in FIRST_SLIDE..=SLIDE_COUNT {
                        let color = if n == current {
                            palette.red
                        } else {
                            palette.faint_ink
                        };
                        let dot = RichText::new("\u{25CF}").color(color).size(10.0);
                        let resp = ui
                            .add(egui::Button::new(dot).frame(false))
                            .on_hover_text(crate::deck::descriptor(n).title);
                        if resp.clicked() {
                            actions.push(ChromeAction::Go(NavIntent::Jump(n)));
                        }
                    }
                    if ui
                        .add_enabled(!at_last, egui::Button::new("\u{2192}"))
                        .clicked()
                    {
                        actions.push(ChromeAction::Go(NavIntent::Next));
                    }
                });
            });
    }

    fn draw_hint(&self, ctx: &Context, palette: &Palette, now: Instant) {
        let idle = now.saturating_duration_since(self.mounted).as_secs_f32();
        if idle < HINT_DELAY {
            return;
        }
        egui::Area::new(egui::Id::new("start-hint"))
            .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -80.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("press Start to begin the presentation")
                        .color(palette.faint_ink)
                        .size(14.0),
                );
            });
    }
}

fn tray_button(ui: &mut egui::Ui, label: &str, palette: &Palette) -> egui::Response {
    let text = RichText::new(label).color(palette.ink).size(16.0);
    ui.add(egui::Button::new(text).fill(Color32::from_black_alpha(40)))
}
