//! Opening slide: the title types itself out, then "Value" is singled out
//! in red while the rest of the line fades away.

use eframe::egui::{Align2, Painter, Rect};

use crate::render::fx::ramp;
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{with_opacity, Palette};

const TITLE: &str = "The Value of a Volunteer";
const LEAD: &str = "The ";
const KEYWORD: &str = "Value";
const TAIL: &str = " of a Volunteer";

const CHAR_SECS: f32 = 0.08;

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let font = text::font(palette.display_size * (rect.width() / 1600.0).clamp(0.5, 1.2));

    let shown = ((t / CHAR_SECS) as usize).min(TITLE.chars().count());
    let typing = shown < TITLE.chars().count();

    // The keyword turns red once the line holds, then outlives the rest.
    let highlighted = t >= 3.92;
    let rest_alpha = 1.0 - ramp(t, 3.92, 2.5);
    let value_alpha = 1.0 - ramp(t, 6.42, 1.0);

    let lead: String = LEAD.chars().take(shown).collect();
    let keyword: String = KEYWORD
        .chars()
        .take(shown.saturating_sub(LEAD.chars().count()))
        .collect();
    let tail: String = TAIL
        .chars()
        .take(shown.saturating_sub(LEAD.chars().count() + KEYWORD.chars().count()))
        .collect();

    let ink = |alpha: f32| with_opacity(palette.ink, alpha * opacity);
    let keyword_color = if highlighted {
        with_opacity(palette.red, value_alpha * opacity)
    } else {
        ink(1.0)
    };

    let galley = text::segmented_line(
        painter,
        &[
            (lead.as_str(), ink(rest_alpha)),
            (keyword.as_str(), keyword_color),
            (tail.as_str(), ink(rest_alpha)),
        ],
        font.clone(),
    );
    // Anchor on the full line's width so the text does not slide while typing.
    let full_width = text::measure(painter, TITLE, font.clone()).x;
    let mut pos = rect.center();
    pos.x -= full_width / 2.0;
    painter.galley(
        pos - eframe::egui::Vec2::new(0.0, galley.size().y / 2.0),
        galley.clone(),
        ink(1.0),
    );

    // Blinking caret while the line is still typing.
    if typing && (clock.phase_elapsed / 0.5) as u32 % 2 == 0 {
        let caret_x = pos.x + galley.size().x + 4.0;
        text::draw(
            painter,
            eframe::egui::Pos2::new(caret_x, rect.center().y),
            Align2::LEFT_CENTER,
            "|",
            font,
            ink(0.6),
        );
    }
}
