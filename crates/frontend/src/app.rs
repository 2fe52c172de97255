use crate::layout::global_context::SurveyContext;
use crate::layout::page_loader::PageLoader;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Dropdown labels shared by both catalogs
    provide_context(SurveyContext::new());

    let loader = PageLoader::new();
    provide_context(loader);

    view! {
        <Shell />
    }
}
