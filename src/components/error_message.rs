//! Error message component

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error" id="error">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
