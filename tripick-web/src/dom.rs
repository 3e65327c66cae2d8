use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Schedule `callback` to run once after `delay_ms`. The closure leaks
/// into the JS runtime, which is acceptable for the handful of one-shot
/// timers the app arms; callers guard against re-arming while one is
/// pending instead of cancelling.
pub fn schedule_once(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let closure = Closure::once(callback);
    let result = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    if let Err(err) = result {
        log::error!("failed to schedule timer: {}", js_error_message(&err));
    }
    closure.forget();
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window().fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Fetch `url` and deserialize its JSON body.
///
/// # Errors
/// Returns an error for network failures, non-success status codes, and
/// bodies that do not match `T`.
#[allow(clippy::future_not_send)]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, JsValue> {
    let resp = fetch_response(url).await?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "request to {url} failed with status {}",
            resp.status()
        )));
    }
    let text = JsFuture::from(resp.text()?).await?;
    let body = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))?;
    serde_json::from_str(&body).map_err(|err| JsValue::from_str(&err.to_string()))
}
