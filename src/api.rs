//! Llamadas HTTP al servidor de tests: bloqueante en nativo, fetch en WASM.

use crate::error::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub type ApiResult<T> = Result<T, ApiError>;

// JSON válido con otra forma => Decode; cuerpo que ni siquiera es JSON => Body
fn decode<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str::<T>(text).map_err(|err| match err.classify() {
        Category::Data => ApiError::Decode(err.to_string()),
        Category::Syntax | Category::Eof | Category::Io => ApiError::Body(err.to_string()),
    })
}

// Sin timeout (como fetch): la corrección puede tardar bastante más de 30 s
#[cfg(not(target_arch = "wasm32"))]
fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder().timeout(None::<std::time::Duration>).build()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn post_json<Req, Resp>(url: &str, payload: &Req) -> ApiResult<Resp>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    let client = http_client().map_err(|err| ApiError::Network(err.to_string()))?;
    log::debug!("POST {url}");

    let response = client
        .post(url)
        .json(payload)
        .send()
        .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !status.is_success() {
        log::warn!("POST {url} devolvió HTTP {status}");
        return Err(ApiError::Status(status.as_u16()));
    }

    decode(&text)
}

#[cfg(target_arch = "wasm32")]
pub async fn post_json<Req, Resp>(url: &str, payload: &Req) -> ApiResult<Resp>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let payload_json =
        serde_json::to_string(payload).map_err(|err| ApiError::Encode(err.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload_json));

    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("no existe window en WASM".into()))?;

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| ApiError::Network(format!("no se pudo crear la petición: {err:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| ApiError::Network(format!("no se pudo asignar headers: {err:?}")))?;

    log::debug!("POST {url}");
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| ApiError::Network(format!("fetch falló: {err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("la respuesta fetch no es un Response".into()))?;

    if !response.ok() {
        log::warn!("POST {url} devolvió HTTP {}", response.status());
        return Err(ApiError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|err| ApiError::Network(format!("no se pudo leer el body: {err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| ApiError::Network(format!("no se pudo leer el body: {err:?}")))?
        .as_string()
        .ok_or_else(|| ApiError::Body("response.text() no devolvió string".into()))?;

    decode(&text)
}
