use crate::config::ClientConfig;
use crate::error::SessionError;
use crate::storage::{SessionStorage, TARGET_COUNT, TARGET_LEVEL, TARGET_SUBJECT};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String, // Enunciado
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>, // vacío o ausente => respuesta libre
    // correct_answer y demás campos del servidor, se reenvían tal cual al corregir
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    pub fn free_text(prompt: impl Into<String>) -> Self {
        Self {
            question: prompt.into(),
            choices: None,
            extra: Map::new(),
        }
    }

    pub fn multiple_choice(prompt: impl Into<String>, choices: &[&str]) -> Self {
        Self {
            question: prompt.into(),
            choices: Some(choices.iter().map(|c| c.to_string()).collect()),
            extra: Map::new(),
        }
    }

    /// Opciones solo si hay al menos una.
    pub fn choice_list(&self) -> Option<&[String]> {
        self.choices.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_free_text(&self) -> bool {
        self.choice_list().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    pub subject: String,
    pub level: String,
    pub count: u32,
}

impl SessionParams {
    /// Lee asignatura/nivel/número de preguntas que dejó la pantalla de inicio.
    pub fn from_storage(
        storage: &dyn SessionStorage,
        config: &ClientConfig,
    ) -> Result<Self, SessionError> {
        let subject = storage
            .get(TARGET_SUBJECT)
            .filter(|s| !s.trim().is_empty())
            .ok_or(SessionError::MissingSubject)?;
        let level = storage
            .get(TARGET_LEVEL)
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| config.defaults.level.clone());
        let count = stored_count(storage).unwrap_or(config.defaults.count);

        Ok(Self {
            subject,
            level,
            count,
        })
    }

    pub fn write_to(&self, storage: &mut dyn SessionStorage) -> Result<(), crate::error::StorageError> {
        storage.set(TARGET_SUBJECT, &self.subject)?;
        storage.set(TARGET_LEVEL, &self.level)?;
        storage.set(TARGET_COUNT, &self.count.to_string())?;
        Ok(())
    }
}

/// `targetCount` guardado, si es un entero positivo.
pub fn stored_count(storage: &dyn SessionStorage) -> Option<u32> {
    storage
        .get(TARGET_COUNT)
        .and_then(|c| c.trim().parse::<u32>().ok())
        .filter(|c| *c > 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Standard,
    Reading { title: String, body: String },
}

impl RenderMode {
    pub fn is_reading(&self) -> bool {
        matches!(self, RenderMode::Reading { .. })
    }
}

// --- Peticiones ---

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerateRequest {
    pub subject: String,
    pub level: String,
    pub count: u32,
}

impl From<&SessionParams> for GenerateRequest {
    fn from(params: &SessionParams) -> Self {
        Self {
            subject: params.subject.clone(),
            level: params.level.clone(),
            count: params.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GradeRequest {
    pub subject: String,
    pub questions: Vec<Question>,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeworkRequest {
    pub subject: String,
    pub score: Value,
    pub improvement_points: Option<String>,
}

// --- Respuestas ---

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratedTest {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub is_reading_mode: Option<bool>,
    #[serde(default)]
    pub passage_title: Option<String>,
    #[serde(default)]
    pub passage_body: Option<String>,
}

impl GeneratedTest {
    pub fn render_mode(&self) -> RenderMode {
        if self.is_reading_mode.unwrap_or(false) {
            RenderMode::Reading {
                title: self.passage_title.clone().unwrap_or_default(),
                body: self.passage_body.clone().unwrap_or_default(),
            }
        } else {
            RenderMode::Standard
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateResponse {
    Success(GeneratedTest),
    #[serde(other)]
    Failure,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GradeResponse {
    Success {
        #[serde(default)]
        result: Option<Value>,
    },
    #[serde(other)]
    Failure,
}

impl GradeResponse {
    /// El resultado de la corrección si la respuesta es utilizable.
    pub fn into_result(self) -> Option<Value> {
        match self {
            GradeResponse::Success { result: Some(v) } if !v.is_null() => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HomeworkResponse {
    Success {
        #[serde(default)]
        homework_content: Option<String>,
    },
    #[serde(other)]
    Failure,
}

impl HomeworkResponse {
    pub fn into_content(self) -> Option<String> {
        match self {
            HomeworkResponse::Success {
                homework_content: Some(text),
            } if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

// --- Informe de corrección (lectura tolerante de lastReport) ---

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GradingReport {
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default)]
    pub good_points: Option<String>,
    #[serde(default)]
    pub improvement_points: Option<String>,
    #[serde(default)]
    pub details: Vec<GradeDetail>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GradeDetail {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub user_answer: Option<Value>,
    #[serde(default)]
    pub correct_answer: Option<Value>,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Test,
    Report,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Test => "/test_page",
            Route::Report => "/report_page",
        }
    }

    pub fn from_path(path: &str) -> Self {
        if path.contains("test_page") {
            Route::Test
        } else if path.contains("report_page") {
            Route::Report
        } else {
            Route::Home
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::embedded().unwrap()
    }

    #[test]
    fn params_require_subject() {
        let storage = MemoryStorage::new();
        assert_eq!(
            SessionParams::from_storage(&storage, &config()),
            Err(SessionError::MissingSubject)
        );

        let storage = MemoryStorage::with_entries([(TARGET_SUBJECT, "   ")]);
        assert_eq!(
            SessionParams::from_storage(&storage, &config()),
            Err(SessionError::MissingSubject)
        );
    }

    #[test]
    fn params_fall_back_to_defaults() {
        let storage = MemoryStorage::with_entries([
            (TARGET_SUBJECT, "Ecuaciones"),
            (TARGET_COUNT, "muchas"),
        ]);
        let params = SessionParams::from_storage(&storage, &config()).unwrap();
        assert_eq!(params.subject, "Ecuaciones");
        assert_eq!(params.level, "intermediate");
        assert_eq!(params.count, 5);
    }

    #[test]
    fn question_keeps_unknown_fields_for_echo() {
        let raw = json!({
            "question": "2 + 2",
            "choices": ["3", "4"],
            "correct_answer": "4"
        });
        let q: Question = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(q.choice_list().map(|c| c.len()), Some(2));
        assert_eq!(serde_json::to_value(&q).unwrap(), raw);
    }

    #[test]
    fn empty_or_null_choices_mean_free_text() {
        let empty: Question =
            serde_json::from_value(json!({"question": "q", "choices": []})).unwrap();
        let null: Question =
            serde_json::from_value(json!({"question": "q", "choices": null})).unwrap();
        let absent: Question = serde_json::from_value(json!({"question": "q"})).unwrap();
        assert!(empty.is_free_text());
        assert!(null.is_free_text());
        assert!(absent.is_free_text());
    }

    #[test]
    fn generate_response_variants() {
        let ok: GenerateResponse = serde_json::from_value(json!({
            "status": "success",
            "questions": [{"question": "q1"}],
            "is_reading_mode": true,
            "passage_title": "T",
            "passage_body": "B"
        }))
        .unwrap();
        match ok {
            GenerateResponse::Success(test) => {
                assert_eq!(test.questions.len(), 1);
                assert_eq!(
                    test.render_mode(),
                    RenderMode::Reading {
                        title: "T".into(),
                        body: "B".into()
                    }
                );
            }
            GenerateResponse::Failure => panic!("esperaba success"),
        }

        let err: GenerateResponse =
            serde_json::from_value(json!({"status": "error", "message": "boom"})).unwrap();
        assert_eq!(err, GenerateResponse::Failure);
    }

    #[test]
    fn grade_response_needs_result() {
        let ok: GradeResponse =
            serde_json::from_value(json!({"status": "success", "result": {"score": 80}})).unwrap();
        assert_eq!(ok.into_result(), Some(json!({"score": 80})));

        let missing: GradeResponse =
            serde_json::from_value(json!({"status": "success"})).unwrap();
        assert_eq!(missing.into_result(), None);

        let null: GradeResponse =
            serde_json::from_value(json!({"status": "success", "result": null})).unwrap();
        assert_eq!(null.into_result(), None);

        let failed: GradeResponse =
            serde_json::from_value(json!({"status": "error", "message": "x"})).unwrap();
        assert_eq!(failed.into_result(), None);
    }

    #[test]
    fn route_from_path() {
        assert_eq!(Route::from_path("/test_page"), Route::Test);
        assert_eq!(Route::from_path("/app/report_page"), Route::Report);
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(Route::Report.path()), Route::Report);
    }
}
