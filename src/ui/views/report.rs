use crate::QuizApp;
use crate::model::Route;
use crate::ui::helpers::{big_button, titled_text};
use crate::ui::layout::scroll_panel;
use crate::view_models::ReportView;
use egui::{Context, Grid, RichText};
use egui_commonmark::CommonMarkViewer;

pub fn ui_report(app: &mut QuizApp, ctx: &Context) {
    let mut volver = false;
    let mut pedir_tarea = false;
    let busy = app.is_busy();

    scroll_panel(ctx, 820.0, |ui| {
        ui.heading("Informe de corrección");
        ui.add_space(10.0);

        match &app.report {
            ReportView::Missing => {
                ui.label("No hay ningún informe guardado en esta sesión.");
            }
            ReportView::Parsed {
                score,
                good_points,
                improvement_points,
                rows,
            } => {
                if let Some(score) = score {
                    ui.label(RichText::new(format!("Puntuación: {score} / 100")).heading().strong());
                    ui.add_space(10.0);
                }
                titled_text(ui, "👍 Puntos fuertes", good_points.as_deref());
                titled_text(ui, "🎯 A mejorar", improvement_points.as_deref());

                if !rows.is_empty() {
                    Grid::new("report_grid")
                        .striped(true)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Nº");
                            ui.label("Pregunta");
                            ui.label("Tu respuesta");
                            ui.label("Solución");
                            ui.label("Estado");
                            ui.end_row();

                            for r in rows {
                                ui.label(r.index_1based.to_string());
                                ui.label(&r.question);
                                ui.label(&r.user_answer);
                                ui.label(&r.correct_answer);
                                ui.label(r.status_label());
                                ui.end_row();
                            }
                        });

                    ui.add_space(10.0);
                    for r in rows.iter().filter(|r| !r.explanation.is_empty()) {
                        ui.collapsing(format!("Explicación de la pregunta {}", r.index_1based), |ui| {
                            ui.label(&r.explanation);
                        });
                    }
                }
            }
            ReportView::Raw(json) => {
                ui.label("El informe no tiene el formato esperado:");
                ui.monospace(json);
            }
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            volver = big_button(ui, "🏠 Volver al inicio", 200.0, 36.0, true);
            let has_report = !matches!(app.report, ReportView::Missing);
            pedir_tarea = big_button(
                ui,
                "📝 Hoja de repaso",
                200.0,
                36.0,
                has_report && !busy,
            );
        });

        if let Some(markdown) = &app.homework {
            ui.add_space(16.0);
            ui.separator();
            CommonMarkViewer::new().show(ui, &mut app.cm_cache, markdown);
        }
    });

    if volver {
        app.navigate(Route::Home);
    } else if pedir_tarea {
        app.solicitar_tarea();
    }
}
