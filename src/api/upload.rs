//! Upload endpoint client
//!
//! POSTs the multipart form to `/upload` and parses the JSON verdict.
//! The endpoint answers `{original_image, detected_image}` on success or
//! `{error}` on logical failure (any HTTP status).

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::error::UploadError;

const UPLOAD_URL: &str = "/upload";
const RESULT_URL: &str = "/result";

/// Image identifiers returned by a successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    pub original_image: String,
    pub detected_image: String,
}

/// Raw response shape: the result fields, or an `error` message, or both.
#[derive(Deserialize)]
struct UploadResponse {
    original_image: Option<String>,
    detected_image: Option<String>,
    error: Option<String>,
}

/// Parse the upload response body.
///
/// An `error` field wins over everything else in the payload.
pub fn parse_upload_response(body: &str) -> Result<UploadResult, UploadError> {
    let response: UploadResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::Transport(format!("Invalid response: {e}")))?;

    if let Some(message) = response.error {
        return Err(UploadError::Server(message));
    }

    match (response.original_image, response.detected_image) {
        (Some(original_image), Some(detected_image)) => Ok(UploadResult {
            original_image,
            detected_image,
        }),
        _ => Err(UploadError::Transport(
            "Invalid response: missing image identifiers".to_string(),
        )),
    }
}

/// Results page route for a finished upload, query values URL-encoded.
pub fn result_route(result: &UploadResult) -> String {
    format!(
        "{}?original={}&detected={}",
        RESULT_URL,
        urlencoding::encode(&result.original_image),
        urlencoding::encode(&result.detected_image),
    )
}

/// POST the form to the upload endpoint and await the verdict.
///
/// Suspends until a response arrives or the transport fails; no timeout,
/// no retry. The marker header tells the server to answer with JSON
/// instead of a rendered page.
pub async fn upload(form_data: &FormData) -> Result<UploadResult, UploadError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form_data.as_ref());

    let request = Request::new_with_str_and_init(UPLOAD_URL, &opts)?;
    request.headers().set("X-Requested-With", "XMLHttpRequest")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(UploadError::Http(resp.status()));
    }

    let body = JsFuture::from(resp.text()?).await?;
    let body = body.as_string().unwrap_or_default();
    parse_upload_response(&body)
}
