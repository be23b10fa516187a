// src/view_models.rs

use crate::model::{GradeDetail, GradingReport};
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(answered: usize, total: usize) -> Self {
        Self { answered, total }
    }

    /// Relleno de la barra entre 0.0 y 1.0 (0 si no hay preguntas).
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f32 / self.total as f32
        }
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.answered, self.total)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub index_1based: usize,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub correct: bool,
    pub explanation: String,
}

impl ReportRow {
    pub fn from_detail(idx: usize, detail: &GradeDetail) -> Self {
        Self {
            index_1based: idx + 1,
            question: detail.question.clone().unwrap_or_default(),
            user_answer: detail.user_answer.as_ref().map(value_text).unwrap_or_default(),
            correct_answer: detail
                .correct_answer
                .as_ref()
                .map(value_text)
                .unwrap_or_default(),
            correct: detail.is_correct,
            explanation: detail.explanation.clone().unwrap_or_default(),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.correct { "✅ Correcta" } else { "❌ Incorrecta" }
    }
}

/// Lo que muestra la pantalla de informe.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportView {
    Missing,
    Parsed {
        score: Option<String>,
        good_points: Option<String>,
        improvement_points: Option<String>,
        rows: Vec<ReportRow>,
    },
    // No encaja con el formato esperado: se enseña el JSON tal cual
    Raw(String),
}

impl ReportView {
    pub fn from_stored(stored: Option<&str>) -> Self {
        let Some(raw) = stored else {
            return ReportView::Missing;
        };
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(_) => return ReportView::Raw(raw.to_string()),
        };
        let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string());
        if !value.is_object() {
            return ReportView::Raw(pretty);
        }
        match serde_json::from_value::<GradingReport>(value) {
            Ok(report) => ReportView::Parsed {
                score: report.score.as_ref().map(value_text),
                good_points: report.good_points,
                improvement_points: report.improvement_points,
                rows: report
                    .details
                    .iter()
                    .enumerate()
                    .map(|(i, d)| ReportRow::from_detail(i, d))
                    .collect(),
            },
            Err(_) => ReportView::Raw(pretty),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_with_no_questions_is_zero() {
        let p = Progress::new(0, 0);
        assert_eq!(p.fraction(), 0.0);
        assert_eq!(p.label(), "0 / 0");
    }

    #[test]
    fn progress_fraction_and_label() {
        let p = Progress::new(2, 8);
        assert_eq!(p.fraction(), 0.25);
        assert_eq!(p.label(), "2 / 8");
    }

    #[test]
    fn report_view_parses_known_fields() {
        let stored = r#"{"score":80,"good_points":"bien","details":[
            {"question":"2+2","user_answer":"4","correct_answer":"4","is_correct":true}
        ]}"#;
        match ReportView::from_stored(Some(stored)) {
            ReportView::Parsed {
                score,
                good_points,
                improvement_points,
                rows,
            } => {
                assert_eq!(score.as_deref(), Some("80"));
                assert_eq!(good_points.as_deref(), Some("bien"));
                assert_eq!(improvement_points, None);
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].index_1based, 1);
                assert!(rows[0].correct);
            }
            other => panic!("esperaba Parsed, llegó {other:?}"),
        }
    }

    #[test]
    fn report_view_falls_back_to_raw() {
        assert_eq!(ReportView::from_stored(None), ReportView::Missing);
        assert!(matches!(
            ReportView::from_stored(Some("[1,2]")),
            ReportView::Raw(_)
        ));
        assert!(matches!(
            ReportView::from_stored(Some("no es json")),
            ReportView::Raw(_)
        ));
        assert!(matches!(
            ReportView::from_stored(Some(r#"{"details":"x"}"#)),
            ReportView::Raw(_)
        ));
    }
}
