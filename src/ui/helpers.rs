// src/ui/helpers.rs
use egui::{Button, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Título en negrita con un bloque de texto debajo; no pinta nada si no hay texto.
pub fn titled_text(ui: &mut Ui, title: &str, text: Option<&str>) {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return;
    };
    ui.label(RichText::new(title).strong());
    ui.label(text);
    ui.add_space(8.0);
}
