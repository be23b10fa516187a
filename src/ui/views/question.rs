use crate::answers::AnswerSheet;
use crate::session::DisplayQuestion;
use egui::{Frame, Margin, RichText, TextEdit, Ui};

/// Pinta la pregunta `idx`: radios si tiene opciones, campo de texto si no.
/// Devuelve `true` si la respuesta cambió en este frame.
pub fn render_question(
    ui: &mut Ui,
    idx: usize,
    question: &DisplayQuestion,
    answers: &mut AnswerSheet,
) -> bool {
    let mut changed = false;

    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(format!("Pregunta {}:", idx + 1)).strong());
                ui.label(&question.prompt);
            });
            ui.add_space(6.0);

            if let Some(selected) = answers.choice_mut(idx) {
                for (ci, choice) in question.choices.iter().enumerate() {
                    changed |= ui.radio_value(selected, Some(ci), choice.as_str()).changed();
                }
            } else if let Some(text) = answers.text_mut(idx) {
                let response = ui.add(
                    TextEdit::singleline(text)
                        .id_salt(("answer", idx))
                        .hint_text("Escribe tu respuesta")
                        .desired_width(f32::INFINITY),
                );
                changed |= response.changed();
            }
        });

    ui.add_space(10.0);
    changed
}
