use super::*;
use crate::api::ApiResult;
use crate::error::ApiError;
use crate::model::{
    GenerateRequest, GenerateResponse, GradeRequest, GradeResponse, HomeworkRequest,
    HomeworkResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Petición en vuelo; solo puede haber una.
pub enum PendingCall {
    Generate {
        params: SessionParams,
        rx: Receiver<ApiResult<GenerateResponse>>,
    },
    Grade(Receiver<ApiResult<GradeResponse>>),
    Homework(Receiver<ApiResult<HomeworkResponse>>),
}

impl QuizApp {
    pub(crate) fn spawn_generate(&mut self, params: SessionParams, request: GenerateRequest) {
        let rx = self.spawn_call(self.config.generate_url(), request);
        self.pending = Some(PendingCall::Generate { params, rx });
    }

    pub(crate) fn spawn_grade(&mut self, request: GradeRequest) {
        let rx = self.spawn_call(self.config.grade_url(), request);
        self.pending = Some(PendingCall::Grade(rx));
    }

    pub(crate) fn spawn_homework(&mut self, request: HomeworkRequest) {
        let rx = self.spawn_call(self.config.homework_url(), request);
        self.pending = Some(PendingCall::Homework(rx));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_call<Req, Resp>(&self, url: String, payload: Req) -> Receiver<ApiResult<Resp>>
    where
        Req: Serialize + Send + 'static,
        Resp: DeserializeOwned + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let repaint = self.repaint.clone();

        std::thread::spawn(move || {
            let result = crate::api::post_json(&url, &payload);
            let _ = tx.send(result);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        rx
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_call<Req, Resp>(&self, url: String, payload: Req) -> Receiver<ApiResult<Resp>>
    where
        Req: Serialize + 'static,
        Resp: DeserializeOwned + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let repaint = self.repaint.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::api::post_json(&url, &payload).await;
            let _ = tx.send(result);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        rx
    }

    /// Se llama en cada frame: entrega el resultado si ya llegó.
    pub fn poll_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending {
            PendingCall::Generate { params, rx } => match receive(&rx) {
                Some(outcome) => self.apply_generate_outcome(params, outcome),
                None => self.pending = Some(PendingCall::Generate { params, rx }),
            },
            PendingCall::Grade(rx) => match receive(&rx) {
                Some(outcome) => self.apply_grade_outcome(outcome),
                None => self.pending = Some(PendingCall::Grade(rx)),
            },
            PendingCall::Homework(rx) => match receive(&rx) {
                Some(outcome) => self.apply_homework_outcome(outcome),
                None => self.pending = Some(PendingCall::Homework(rx)),
            },
        }
    }
}

// Canal cerrado sin respuesta = fallo de red, así el overlay nunca se queda colgado
fn receive<T>(rx: &Receiver<ApiResult<T>>) -> Option<ApiResult<T>> {
    match rx.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(ApiError::Network(
            "la petición terminó sin respuesta".into(),
        ))),
    }
}
