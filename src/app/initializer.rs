use super::*;
use crate::api::ApiResult;
use crate::model::{GenerateRequest, GenerateResponse};

impl QuizApp {
    /// Arranque de la pantalla de test: lee la sesión y pide las preguntas.
    pub fn iniciar_test(&mut self) {
        if let Some((params, request)) = self.prepare_generate() {
            self.spawn_generate(params, request);
        }
    }

    /// Sin asignatura se vuelve al inicio sin avisar y sin petición.
    pub fn prepare_generate(&mut self) -> Option<(SessionParams, GenerateRequest)> {
        if self.is_busy() {
            log::warn!("ya hay una petición en curso; se ignora la generación");
            return None;
        }

        let params = match SessionParams::from_storage(self.storage.as_ref(), &self.config) {
            Ok(params) => params,
            Err(err) => {
                log::info!("{err}; volviendo al inicio");
                self.navigate(Route::Home);
                return None;
            }
        };

        self.session = None;
        self.loading = Some(MSG_GENERATING.to_string());
        log::info!(
            "generando test: asignatura={} nivel={} preguntas={}",
            params.subject,
            params.level,
            params.count
        );
        let request = GenerateRequest::from(&params);
        Some((params, request))
    }

    pub fn apply_generate_outcome(
        &mut self,
        params: SessionParams,
        outcome: ApiResult<GenerateResponse>,
    ) {
        self.loading = None;

        match outcome {
            Ok(GenerateResponse::Success(test)) => {
                let session = TestSession::new(params, test, self.config.typeset_math);
                log::info!(
                    "{} preguntas recibidas (modo {})",
                    session.len(),
                    if session.mode.is_reading() { "lectura" } else { "estándar" }
                );
                self.session = Some(session);
            }
            Ok(GenerateResponse::Failure) => {
                log::warn!("el servidor no pudo generar el test");
                self.fallo_generacion();
            }
            Err(err) => {
                log::error!("error generando el test: {err}");
                self.fallo_generacion();
            }
        }
    }

    fn fallo_generacion(&mut self) {
        self.session = None;
        self.alert = Some(MSG_GENERATION_FAILED.to_string());
        self.navigate(Route::Home);
    }

    pub fn submit_visible(&self) -> bool {
        self.session.is_some()
    }
}
