use crate::QuizApp;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Arranca la app sobre el `<canvas>` con ese id.
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<(), JsValue> {
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no existe document"))?;
    let canvas = document
        .get_element_by_id(&canvas_id)
        .ok_or_else(|| JsValue::from_str("no se encontró el canvas"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("el elemento no es un canvas"))?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(QuizApp::new(cc)?))),
        )
        .await
}
