use eframe::egui::Color32;

/// Per-slide palette. The deck uses two: a warm paper light theme and a
/// near-black dark theme, plus shared accent colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub name: &'static str,
    pub background: Color32,
    pub ink: Color32,
    pub faint_ink: Color32,
    pub red: Color32,
    pub blue: Color32,
    pub navy: Color32,
    pub parchment: Color32,
    pub display_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub caption_size: f32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color32::from_rgb(0xFA, 0xF7, 0xF2),
            ink: Color32::from_rgb(0x11, 0x18, 0x27),
            faint_ink: Color32::from_rgb(0x6B, 0x72, 0x80),
            red: Color32::from_rgb(0xEF, 0x44, 0x44),
            blue: Color32::from_rgb(0x3B, 0x82, 0xF6),
            navy: Color32::from_rgb(0x1E, 0x29, 0x3B),
            parchment: Color32::from_rgb(0xF5, 0xF5, 0xF4),
            display_size: 96.0,
            heading_size: 56.0,
            body_size: 26.0,
            caption_size: 15.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color32::from_rgb(0x03, 0x07, 0x12),
            ink: Color32::from_rgb(0xE7, 0xE5, 0xE4),
            faint_ink: Color32::from_rgb(0x78, 0x71, 0x6C),
            ..Self::light()
        }
    }

    pub fn for_slide(slide: usize) -> Self {
        if crate::deck::is_dark(slide) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Scale a color's alpha by `opacity` in `[0, 1]`.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let a = (color.a() as f32 * opacity.clamp(0.0, 1.0)) as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Linear blend between two colors, `t` in `[0, 1]`.
pub fn mix(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color32::from_rgba_unmultiplied(
        ch(from.r(), to.r()),
        ch(from.g(), to.g()),
        ch(from.b(), to.b()),
        ch(from.a(), to.a()),
    )
}
