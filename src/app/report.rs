use super::*;
use crate::api::ApiResult;
use crate::model::{GradingReport, HomeworkRequest, HomeworkResponse};
use crate::storage::LAST_REPORT;
use serde_json::Value;

impl QuizApp {
    pub fn cargar_informe(&mut self) {
        let stored = self.storage.get(LAST_REPORT);
        if stored.is_none() {
            log::info!("no hay informe guardado");
        }
        self.report = ReportView::from_stored(stored.as_deref());
        self.homework = None;
    }

    pub fn solicitar_tarea(&mut self) {
        if let Some(request) = self.prepare_homework() {
            self.spawn_homework(request);
        }
    }

    pub fn prepare_homework(&mut self) -> Option<HomeworkRequest> {
        if self.is_busy() {
            return None;
        }
        let stored = self.storage.get(LAST_REPORT)?;
        let report: GradingReport = serde_json::from_str(&stored).unwrap_or_default();
        let request = HomeworkRequest {
            subject: self.storage.get(TARGET_SUBJECT).unwrap_or_default(),
            score: report.score.unwrap_or(Value::Null),
            improvement_points: report.improvement_points,
        };
        self.loading = Some(MSG_HOMEWORK.to_string());
        Some(request)
    }

    pub fn apply_homework_outcome(&mut self, outcome: ApiResult<HomeworkResponse>) {
        self.loading = None;
        match outcome.map(HomeworkResponse::into_content) {
            Ok(Some(content)) => {
                log::info!("hoja de repaso recibida ({} bytes)", content.len());
                self.homework = Some(content);
            }
            Ok(None) => {
                log::warn!("el servidor no devolvió hoja de repaso");
                self.alert = Some(MSG_HOMEWORK_FAILED.to_string());
            }
            Err(err) => {
                log::error!("error pidiendo la hoja de repaso: {err}");
                self.alert = Some(MSG_CONNECTION_FAILED.to_string());
            }
        }
    }
}
