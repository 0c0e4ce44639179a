//! Error type for the upload flow

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Shown when a failure carries no usable message of its own.
pub const GENERIC_UPLOAD_ERROR: &str = "An error occurred during upload";

/// Everything that can terminate an upload attempt.
///
/// Each variant's display text is the message shown in the error area.
/// Every failure is terminal for the attempt; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    /// Declared MIME type is not an accepted image format.
    #[error("Please select a valid image file (JPG, JPEG, PNG)")]
    InvalidFileType,

    /// Submit with no file (or a zero-byte file) in the `image` field.
    #[error("Please select an image to upload")]
    NoFileSelected,

    /// Non-success HTTP status from the upload endpoint.
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// 2xx response whose JSON body carried an `error` field.
    #[error("{0}")]
    Server(String),

    /// The request itself failed, or the response body was unreadable.
    #[error("{0}")]
    Transport(String),
}

impl From<JsValue> for UploadError {
    fn from(value: JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return UploadError::Transport(String::from(err.message()));
        }
        let message = value
            .as_string()
            .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string());
        UploadError::Transport(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_type_message() {
        let display = format!("{}", UploadError::InvalidFileType);
        assert_eq!(display, "Please select a valid image file (JPG, JPEG, PNG)");
    }

    #[test]
    fn test_no_file_selected_message() {
        let display = format!("{}", UploadError::NoFileSelected);
        assert_eq!(display, "Please select an image to upload");
    }

    #[test]
    fn test_http_status_message() {
        let display = format!("{}", UploadError::Http(500));
        assert_eq!(display, "HTTP error! status: 500");
    }

    #[test]
    fn test_server_message_shown_verbatim() {
        let display = format!("{}", UploadError::Server("bad image".to_string()));
        assert_eq!(display, "bad image");
    }

    #[test]
    fn test_transport_message_shown_verbatim() {
        let display = format!("{}", UploadError::Transport("connection reset".to_string()));
        assert_eq!(display, "connection reset");
    }

    #[test]
    fn test_messages_are_stable_across_repeats() {
        // Showing the same error twice must produce the same single message
        let first = UploadError::InvalidFileType.to_string();
        let second = UploadError::InvalidFileType.to_string();
        assert_eq!(first, second);
    }
}
