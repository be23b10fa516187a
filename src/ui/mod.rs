mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Route;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultado de la petición en curso, si ya llegó
        self.poll_pending();

        // BOTÓN SUPERIOR VOLVER AL INICIO (solo durante el test)
        if self.route == Route::Test {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.route {
            Route::Home => views::home::ui_home(self, ctx),
            Route::Test => views::test::ui_test(self, ctx),
            Route::Report => views::report::ui_report(self, ctx),
        }

        if self.confirm_back_home {
            views::dialogs::ui_confirm_back_home(self, ctx);
        }

        views::loading::ui_loading(self, ctx);

        // Primero el aviso, después la navegación
        #[cfg(target_arch = "wasm32")]
        if let Some(message) = self.alert.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        views::dialogs::ui_alert(self, ctx);

        self.flush_navigation();

        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
