//! Upload form controller
//!
//! Wires the file input and the submit handler: client-side type check,
//! local preview, one POST to the upload endpoint, redirect on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlFormElement, HtmlInputElement, SubmitEvent};

use crate::api::upload::{self, result_route};
use crate::error::UploadError;

/// MIME types accepted by the file input, matched exactly as the browser
/// reports them.
const SUPPORTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

pub fn is_supported_image_type(mime_type: &str) -> bool {
    SUPPORTED_IMAGE_TYPES.contains(&mime_type)
}

/// The `image` field must hold a non-empty file before anything goes on
/// the wire.
fn has_selected_file(form_data: &FormData) -> bool {
    form_data
        .get("image")
        .dyn_into::<File>()
        .map(|file| file.size() > 0.0)
        .unwrap_or(false)
}

#[component]
pub fn UploadForm(
    set_preview: WriteSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    uploading: ReadSignal<bool>,
    set_uploading: WriteSignal<bool>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = ev.target().unwrap().unchecked_into();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !is_supported_image_type(&file.type_()) {
            set_error.set(Some(UploadError::InvalidFileType.to_string()));
            input.set_value("");
            set_preview.set(None);
            return;
        }

        set_error.set(None);
        let file = gloo::file::File::from(file);
        spawn_local(async move {
            match gloo::file::futures::read_as_data_url(&file).await {
                Ok(data_url) => set_preview.set(Some(data_url)),
                Err(e) => gloo::console::error!(format!("preview read failed: {e}")),
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form: HtmlFormElement = ev.target().unwrap().unchecked_into();
        let Ok(form_data) = FormData::new_with_form(&form) else {
            set_error.set(Some(crate::error::GENERIC_UPLOAD_ERROR.to_string()));
            return;
        };

        if !has_selected_file(&form_data) {
            set_error.set(Some(UploadError::NoFileSelected.to_string()));
            return;
        }

        set_uploading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match upload::upload(&form_data).await {
                Ok(result) => {
                    let window = web_sys::window().unwrap();
                    let _ = window.location().set_href(&result_route(&result));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            // Runs on every path so the UI never sticks in "loading"
            set_uploading.set(false);
        });
    };

    view! {
        <form method="post" enctype="multipart/form-data" on:submit=on_submit>
            <div class="form-group">
                <input
                    type="file"
                    name="image"
                    accept="image/jpeg,image/png"
                    on:change=on_change
                />
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || uploading.get()
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload and Detect" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        assert!(is_supported_image_type("image/jpeg"));
        assert!(is_supported_image_type("image/jpg"));
        assert!(is_supported_image_type("image/png"));
    }

    #[test]
    fn test_rejected_types() {
        assert!(!is_supported_image_type("image/gif"));
        assert!(!is_supported_image_type("image/webp"));
        assert!(!is_supported_image_type("application/pdf"));
        assert!(!is_supported_image_type("text/plain"));
        assert!(!is_supported_image_type(""));
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        // Browsers report lowercase MIME types; anything else is rejected
        assert!(!is_supported_image_type("image/JPEG"));
        assert!(!is_supported_image_type("IMAGE/png"));
    }
}
