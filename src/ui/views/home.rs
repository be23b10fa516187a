use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{ComboBox, Context, TextEdit};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    let levels = app.config.levels.clone();
    let counts = app.config.counts.clone();
    let mut empezar = false;

    centered_panel(ctx, 280.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("¿Qué quieres repasar hoy?");
        });
        ui.add_space(18.0);

        let form = &mut app.home_form;
        egui::Grid::new("home_form_grid")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                ui.label("Tema");
                ui.add(
                    TextEdit::singleline(&mut form.subject)
                        .hint_text("p. ej. Ecuaciones de segundo grado")
                        .desired_width(280.0),
                );
                ui.end_row();

                ui.label("Nivel");
                ComboBox::from_id_salt("level_combo")
                    .selected_text(form.level.as_str())
                    .show_ui(ui, |ui| {
                        for level in &levels {
                            ui.selectable_value(&mut form.level, level.clone(), level.as_str());
                        }
                    });
                ui.end_row();

                ui.label("Preguntas");
                ComboBox::from_id_salt("count_combo")
                    .selected_text(form.count.to_string())
                    .show_ui(ui, |ui| {
                        for count in &counts {
                            ui.selectable_value(&mut form.count, *count, count.to_string());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(18.0);
        let can_start = form.to_params().is_some();
        ui.vertical_centered(|ui| {
            empezar = big_button(ui, "▶ Empezar test", 220.0, 40.0, can_start);
        });
    });

    if empezar {
        app.comenzar_test();
    }
}
