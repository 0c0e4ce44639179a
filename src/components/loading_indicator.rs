//! Loading indicator component

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(uploading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || uploading.get()>
            <div class="loading">
                <div class="spinner"></div>
                <p>"Processing image..."</p>
            </div>
        </Show>
    }
}
