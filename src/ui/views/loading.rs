use crate::QuizApp;
use egui::{Context, Id, Modal, RichText, Spinner};

/// Overlay bloqueante mientras hay una petición en curso.
pub fn ui_loading(app: &QuizApp, ctx: &Context) {
    let Some(message) = &app.loading else {
        return;
    };

    Modal::new(Id::new("loading_overlay")).show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.add(Spinner::new().size(36.0));
            ui.add_space(16.0);
            ui.label(RichText::new(message).heading());
            ui.add_space(8.0);
        });
    });
}
