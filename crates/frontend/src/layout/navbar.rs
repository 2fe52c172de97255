use crate::config::config;
use crate::layout::page_loader::PageLoader;
use crate::layout::scroll_guard::use_scroll_guard;
use leptos::html::Nav;
use leptos::prelude::*;

/// Навигационная панель с вкладками. Прилипает к верху окна при прокрутке.
#[component]
pub fn Navbar() -> impl IntoView {
    let loader =
        leptos::context::use_context::<PageLoader>().expect("PageLoader context not found");
    let config = config();

    let nav_ref = NodeRef::<Nav>::new();
    let stuck = use_scroll_guard(nav_ref);

    let stuck_class = config.stuck_class.clone();
    let nav_class = move || {
        if stuck.get() {
            format!("nav nav-tabs {}", stuck_class)
        } else {
            "nav nav-tabs".to_string()
        }
    };

    let tab_navigation = config.tab_navigation;
    let on_tab_click = move |id: String| {
        if tab_navigation {
            loader.navigate_to(&id);
        } else {
            log::debug!("Tab '{}' clicked, tab navigation is disabled", id);
        }
    };

    view! {
        <nav id=config.nav_id.clone() class=nav_class node_ref=nav_ref>
            <ul class="nav">
                {move || {
                    let tabs = loader.tabs.get();
                    tabs.tabs()
                        .iter()
                        .map(|tab| {
                            let id = tab.id.clone();
                            let is_active = tabs.is_active(&tab.id);
                            view! {
                                <li class="nav-item">
                                    <a
                                        id=tab.id.clone()
                                        class="nav-link"
                                        class:active=is_active
                                        on:click=move |_| on_tab_click(id.clone())
                                    >
                                        {tab.title.clone()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
