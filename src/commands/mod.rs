//! Network Client
//!
//! Fetch wrappers for the SparkDeck JSON API, organized by domain. Every
//! call returns `Result<_, String>`; catalog reads recover with fallbacks.

mod ideas;
mod submit;

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use ideas::*;
pub use submit::*;

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Issue a JSON request and return the response body text
async fn request(method: &str, url: &str, body: Option<String>) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request.headers().set("Accept", "application/json").map_err(js_err)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json").map_err(js_err)?;
    }

    let window = web_sys::window().ok_or("no window")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_err)?).await.map_err(js_err)?;
    text.as_string().ok_or_else(|| "response body is not text".to_string())
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let text = request("GET", url, None).await?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let text = request("POST", url, Some(payload)).await?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}
