use super::PageLoader;
use crate::config::config;
use leptos::prelude::*;

/// Контейнер, в который вставляется загруженный фрагмент.
/// Starts the initial load when mounted.
#[component]
pub fn PageRow() -> impl IntoView {
    let loader =
        leptos::context::use_context::<PageLoader>().expect("PageLoader context not found");

    loader.initialize();

    view! {
        <div
            id=config().container_id.clone()
            class="row"
            inner_html=move || loader.content.get().unwrap_or_default()
        ></div>
    }
}
