use eframe::egui;

/// Mix two colors channel by channel; `t = 0.0` gives `from`, `t = 1.0` gives `to`
pub fn blend(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
        mix(from.a(), to.a()),
    )
}

/// Visual state of one category button
pub struct CountButtonStyle {
    pub accent: egui::Color32,
    pub fill: egui::Color32,
    pub highlight: egui::Color32,
    /// Most recently incremented category
    pub active: bool,
    /// Cue strength in `0.0..=1.0`
    pub flash: f32,
}

/// Render a full-width category button with its live count on the right
pub fn count_button(
    ui: &mut egui::Ui,
    label: &str,
    count: u64,
    style: &CountButtonStyle,
) -> egui::Response {
    let base_fill = if style.active {
        blend(style.fill, style.highlight, 0.45)
    } else {
        style.fill
    };
    let fill = blend(base_fill, style.highlight, style.flash);

    let stroke = if style.active {
        egui::Stroke::new(2.0, style.highlight)
    } else {
        egui::Stroke::new(1.0, style.accent)
    };

    let text = egui::RichText::new(format!("{label}    {count}"))
        .size(16.0)
        .color(egui::Color32::WHITE);

    let width = ui.available_width();
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .stroke(stroke)
            .min_size(egui::vec2(width, 40.0)),
    )
}

/// "1", "2", ... "9", "0" for the first ten categories
pub fn shortcut_hint(index: usize) -> Option<char> {
    match index {
        0..=8 => char::from_digit(index as u32 + 1, 10),
        9 => Some('0'),
        _ => None,
    }
}
