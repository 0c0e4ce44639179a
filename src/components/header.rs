//! Page header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Object Detection"</h1>
            <p class="subtitle">"Upload an image to detect objects"</p>
        </header>
    }
}
