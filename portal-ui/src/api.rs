//! API base URL and the shared client

use std::rc::Rc;

use hospital_portal::ApiClient;
use wasm_bindgen::prelude::*;

use crate::transport::GlooTransport;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

const STORAGE_KEY: &str = "hospital_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Point every page at another backend. Takes effect on the next page load.
#[wasm_bindgen]
pub fn set_api_base(url: &str) -> Result<(), JsValue> {
    let storage = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("Local storage unavailable"))?;
    storage.set_item(STORAGE_KEY, url)
}

pub fn client() -> Rc<ApiClient<GlooTransport>> {
    Rc::new(ApiClient::new(get_api_base(), GlooTransport))
}
