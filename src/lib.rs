pub mod answers;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod storage;
pub mod typeset;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
