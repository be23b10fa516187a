use crate::QuizApp;
#[cfg(not(target_arch = "wasm32"))]
use crate::app::MSG_CONFIRM_BACK_HOME;
#[cfg(not(target_arch = "wasm32"))]
use egui::{Align2, Id, Modal, RichText, Window};
use egui::Context;

/// Confirmación bloqueante: el modal tapa el test hasta que se responde.
#[cfg(not(target_arch = "wasm32"))]
pub fn ui_confirm_back_home(app: &mut QuizApp, ctx: &Context) {
    let mut answer = None;
    let modal = Modal::new(Id::new("confirm_back_home")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(RichText::new("Volver al inicio").heading());
        ui.add_space(8.0);
        ui.label(MSG_CONFIRM_BACK_HOME);
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Sí, volver").clicked() {
                answer = Some(true);
            }
            if ui.button("No").clicked() {
                answer = Some(false);
            }
        });
    });
    // Escape o clic fuera equivale a "No"
    if answer.is_none() && modal.should_close() {
        answer = Some(false);
    }

    if let Some(confirmed) = answer {
        app.responder_volver_a_inicio(confirmed);
    }
}

/// En web bloquea `window.confirm`.
#[cfg(target_arch = "wasm32")]
pub fn ui_confirm_back_home(app: &mut QuizApp, _ctx: &Context) {
    let confirmed = web_sys::window()
        .and_then(|w| w.confirm_with_message(crate::app::MSG_CONFIRM_BACK_HOME).ok())
        .unwrap_or(false);
    app.responder_volver_a_inicio(confirmed);
}

// En web el aviso es window.alert (ver ui/mod.rs)
#[cfg(not(target_arch = "wasm32"))]
pub fn ui_alert(app: &mut QuizApp, ctx: &Context) {
    let Some(message) = app.alert.as_deref() else {
        return;
    };

    let mut close = false;
    Window::new("Aviso")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("Aceptar").clicked() {
                close = true;
            }
        });

    if close {
        app.alert = None;
    }
}
