//! Local preview of the selected image

use leptos::prelude::*;

#[component]
pub fn ImagePreview(preview: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="image-preview" id="imagePreview">
            {move || preview.get().map(|src| view! { <img src=src alt="Preview" /> })}
        </div>
    }
}
