//! Main application component

use leptos::prelude::*;

use crate::components::{
    error_message::ErrorMessage, header::Header, image_preview::ImagePreview,
    loading_indicator::LoadingIndicator, upload_form::UploadForm,
};

/// Root component. Owns the transient UI state and hands it to the form
/// and the display pieces.
#[component]
pub fn App() -> impl IntoView {
    // UI state: preview data URL, error text, request in flight
    let (preview, set_preview) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);

    view! {
        <div class="container">
            <Header />

            <ErrorMessage error=error />

            <UploadForm
                set_preview=set_preview
                set_error=set_error
                uploading=uploading
                set_uploading=set_uploading
            />

            <ImagePreview preview=preview />

            <LoadingIndicator uploading=uploading />
        </div>
    }
}
