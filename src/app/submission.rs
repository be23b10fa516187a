use super::*;
use crate::api::ApiResult;
use crate::model::{GradeRequest, GradeResponse};
use crate::storage::LAST_REPORT;

impl QuizApp {
    pub fn enviar_respuestas(&mut self) {
        if let Some(request) = self.prepare_submission() {
            self.spawn_grade(request);
        }
    }

    pub fn prepare_submission(&mut self) -> Option<GradeRequest> {
        if self.is_busy() {
            log::debug!("corrección ya en curso; se ignora el envío");
            return None;
        }
        if self.confirm_back_home {
            log::debug!("confirmación de volver al inicio abierta; se ignora el envío");
            return None;
        }
        let session = self.session.as_ref()?;
        let request = session.grade_request();
        log::info!(
            "enviando {} respuestas ({} contestadas)",
            request.answers.len(),
            session.progress().answered
        );
        self.loading = Some(MSG_GRADING.to_string());
        Some(request)
    }

    /// Con error las respuestas se quedan en la hoja para reintentar.
    pub fn apply_grade_outcome(&mut self, outcome: ApiResult<GradeResponse>) {
        self.loading = None;

        let response = match outcome {
            Ok(response) => response,
            Err(err) if err.is_transport() => {
                log::error!("error de comunicación al corregir: {err}");
                self.alert = Some(MSG_CONNECTION_FAILED.to_string());
                return;
            }
            Err(err) => {
                log::warn!("respuesta de corrección ilegible: {err}");
                self.alert = Some(MSG_UNPARSEABLE.to_string());
                return;
            }
        };

        let Some(result) = response.into_result() else {
            log::warn!("la corrección no trae resultado utilizable");
            self.alert = Some(MSG_UNPARSEABLE.to_string());
            return;
        };

        let serialized = match serde_json::to_string(&result) {
            Ok(s) => s,
            Err(err) => {
                log::error!("no se pudo serializar el informe: {err}");
                self.alert = Some(MSG_REPORT_NOT_SAVED.to_string());
                return;
            }
        };

        if let Err(err) = self.storage.set(LAST_REPORT, &serialized) {
            log::error!("{err}");
            self.alert = Some(MSG_REPORT_NOT_SAVED.to_string());
            return;
        }

        self.navigate(Route::Report);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app_with;
    use super::*;
    use crate::error::ApiError;
    use crate::model::{GeneratedTest, GenerateResponse, Question};
    use serde_json::json;

    fn app_with_questions(questions: Vec<Question>) -> QuizApp {
        let mut app = app_with(&[(TARGET_SUBJECT, "Historia")]);
        let (params, _) = app.prepare_generate().unwrap();
        app.apply_generate_outcome(
            params,
            Ok(GenerateResponse::Success(GeneratedTest {
                questions,
                is_reading_mode: Some(false),
                passage_title: None,
                passage_body: None,
            })),
        );
        app
    }

    fn three_free_text() -> QuizApp {
        app_with_questions(vec![
            Question::free_text("Q0"),
            Question::free_text("Q1"),
            Question::free_text("Q2"),
        ])
    }

    #[test]
    fn answers_follow_question_order() {
        let mut app = three_free_text();
        let session = app.session.as_mut().unwrap();
        session.answers.set_text(2, "c");
        session.answers.set_text(0, "a");

        let request = app.prepare_submission().unwrap();
        assert_eq!(request.subject, "Historia");
        assert_eq!(request.answers, vec!["a", "", "c"]);
        assert_eq!(app.loading.as_deref(), Some(MSG_GRADING));
    }

    #[test]
    fn http_500_alerts_and_stays() {
        let mut app = three_free_text();
        app.prepare_submission().unwrap();
        app.apply_grade_outcome(Err(ApiError::Status(500)));

        assert_eq!(app.alert.as_deref(), Some(MSG_CONNECTION_FAILED));
        assert_eq!(app.pending_navigation, None);
        assert!(app.loading.is_none());
        assert!(app.session.is_some());
        assert_eq!(app.storage.get(LAST_REPORT), None);
    }

    #[test]
    fn success_stores_report_and_navigates() {
        let mut app = three_free_text();
        app.prepare_submission().unwrap();
        app.apply_grade_outcome(Ok(GradeResponse::Success {
            result: Some(json!({"score": 80})),
        }));

        let stored = app.storage.get(LAST_REPORT).expect("informe guardado");
        let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(value, json!({"score": 80}));
        assert_eq!(app.pending_navigation, Some(Route::Report));
        assert!(app.loading.is_none());
        assert!(app.alert.is_none());
    }

    #[test]
    fn unexpected_shape_alerts_and_keeps_answers() {
        let mut app = three_free_text();
        app.session.as_mut().unwrap().answers.set_text(1, "b");
        app.prepare_submission().unwrap();
        app.apply_grade_outcome(Ok(GradeResponse::Success { result: None }));

        assert_eq!(app.alert.as_deref(), Some(MSG_UNPARSEABLE));
        assert_eq!(app.pending_navigation, None);
        assert_eq!(app.storage.get(LAST_REPORT), None);
        assert_eq!(app.session.as_ref().unwrap().collect_answers(), vec!["", "b", ""]);
    }

    #[test]
    fn non_json_body_is_a_connection_failure() {
        let mut app = three_free_text();
        app.prepare_submission().unwrap();
        app.apply_grade_outcome(Err(ApiError::Body("expected value at line 1 column 1".into())));
        assert_eq!(app.alert.as_deref(), Some(MSG_CONNECTION_FAILED));
        assert!(app.loading.is_none());
        assert_eq!(app.pending_navigation, None);
    }

    #[test]
    fn json_with_wrong_shape_is_a_parse_failure() {
        let mut app = three_free_text();
        app.prepare_submission().unwrap();
        app.apply_grade_outcome(Err(ApiError::Decode("missing field `status`".into())));
        assert_eq!(app.alert.as_deref(), Some(MSG_UNPARSEABLE));
        assert!(app.loading.is_none());
        assert_eq!(app.storage.get(LAST_REPORT), None);
    }

    #[test]
    fn submit_ignored_while_back_home_prompt_is_open() {
        let mut app = three_free_text();
        app.pedir_volver_a_inicio();
        app.enviar_respuestas();

        assert!(!app.is_busy());
        assert!(app.loading.is_none());
        assert!(app.prepare_submission().is_none());

        app.responder_volver_a_inicio(false);
        assert!(app.prepare_submission().is_some());
    }

    #[test]
    fn choice_answers_submit_raw_value() {
        let mut app = app_with_questions(vec![
            Question::multiple_choice("Q0", &["$\\frac{1}{2}$", "$1$"]),
            Question::free_text("Q1"),
        ]);
        app.session.as_mut().unwrap().answers.select(0, 0);
        let request = app.prepare_submission().unwrap();
        assert_eq!(request.answers, vec!["$\\frac{1}{2}$", ""]);
    }

    #[test]
    fn no_session_means_nothing_to_submit() {
        let mut app = app_with(&[]);
        assert!(app.prepare_submission().is_none());
        assert!(app.loading.is_none());
    }
}
