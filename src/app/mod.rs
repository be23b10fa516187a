use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::model::{Route, SessionParams, stored_count};
use crate::session::TestSession;
use crate::storage::{SessionStorage, TARGET_LEVEL, TARGET_SUBJECT};
use crate::view_models::ReportView;
use eframe::egui;
use egui_commonmark::CommonMarkCache;

// Submódulos
pub mod dispatch;
pub mod initializer;
pub mod navigation;
pub mod report;
pub mod submission;

pub use dispatch::PendingCall;

// Textos de estado y avisos
pub const MSG_GENERATING: &str = "Generando preguntas...";
pub const MSG_GRADING: &str = "Corrigiendo...";
pub const MSG_HOMEWORK: &str = "Preparando la hoja de repaso...";
pub const MSG_GENERATION_FAILED: &str =
    "No se pudieron generar las preguntas. Volvemos a la pantalla de inicio.";
pub const MSG_UNPARSEABLE: &str =
    "No se pudo interpretar la corrección. Tus respuestas se han conservado; inténtalo de nuevo.";
pub const MSG_CONNECTION_FAILED: &str =
    "Error de comunicación con el servidor. Comprueba su estado e inténtalo de nuevo.";
pub const MSG_REPORT_NOT_SAVED: &str = "No se pudo guardar el informe de corrección.";
pub const MSG_HOMEWORK_FAILED: &str = "No se pudo generar la hoja de repaso.";
pub const MSG_CONFIRM_BACK_HOME: &str =
    "¿Interrumpir el test y volver al inicio? (se borrará lo que has escrito)";

/// Valores del formulario de la pantalla de inicio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeForm {
    pub subject: String,
    pub level: String,
    pub count: u32,
}

impl HomeForm {
    pub fn from_storage(storage: &dyn SessionStorage, config: &ClientConfig) -> Self {
        Self {
            subject: storage.get(TARGET_SUBJECT).unwrap_or_default(),
            level: storage
                .get(TARGET_LEVEL)
                .unwrap_or_else(|| config.defaults.level.clone()),
            count: stored_count(storage).unwrap_or(config.defaults.count),
        }
    }

    pub fn to_params(&self) -> Option<SessionParams> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return None;
        }
        Some(SessionParams {
            subject: subject.to_string(),
            level: self.level.clone(),
            count: self.count,
        })
    }
}

pub struct QuizApp {
    pub config: ClientConfig,
    pub storage: Box<dyn SessionStorage>,
    pub route: Route,
    pub session: Option<TestSession>,
    pub report: ReportView,
    pub homework: Option<String>,
    pub home_form: HomeForm,
    pub loading: Option<String>, // Some => overlay bloqueante con ese mensaje
    pub alert: Option<String>,
    pub pending_navigation: Option<Route>,
    pub confirm_back_home: bool,
    pub pending: Option<PendingCall>,
    pub cm_cache: CommonMarkCache,
    repaint: Option<egui::Context>,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, ConfigError> {
        let config = ClientConfig::load()?;
        let mut app = Self::with_storage(config, crate::storage::default_storage());
        app.repaint = Some(cc.egui_ctx.clone());
        app.enter_route(initial_route());
        Ok(app)
    }

    /// Sin contexto de egui ni llamadas en curso; la ruta inicial es Home.
    pub fn with_storage(config: ClientConfig, storage: Box<dyn SessionStorage>) -> Self {
        let home_form = HomeForm::from_storage(storage.as_ref(), &config);
        Self {
            config,
            storage,
            route: Route::Home,
            session: None,
            report: ReportView::Missing,
            homework: None,
            home_form,
            loading: None,
            alert: None,
            pending_navigation: None,
            confirm_back_home: false,
            pending: None,
            cm_cache: CommonMarkCache::default(),
            repaint: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_route() -> Route {
    Route::Home
}

#[cfg(target_arch = "wasm32")]
fn initial_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::test_support::app_with;
    use super::*;
    use crate::storage::TARGET_COUNT;

    #[test]
    fn home_form_prefills_from_storage() {
        let app = app_with(&[(TARGET_SUBJECT, "Fracciones"), (TARGET_COUNT, "10")]);
        assert_eq!(app.home_form.subject, "Fracciones");
        assert_eq!(app.home_form.count, 10);
        assert_eq!(app.home_form.level, "intermediate");
    }

    #[test]
    fn home_form_ignores_zero_or_padded_count() {
        let app = app_with(&[(TARGET_COUNT, "0")]);
        assert_eq!(app.home_form.count, app.config.defaults.count);

        let app = app_with(&[(TARGET_COUNT, " 15 ")]);
        assert_eq!(app.home_form.count, 15);
    }

    #[test]
    fn home_form_without_subject_has_no_params() {
        let form = HomeForm {
            subject: "  ".into(),
            level: "advanced".into(),
            count: 5,
        };
        assert_eq!(form.to_params(), None);
    }
}
