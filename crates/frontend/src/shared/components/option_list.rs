use leptos::prelude::*;

/// OptionList component - меню выпадающего списка
///
/// Renders one `dropdown-item` per entry of `items`, in order, and binds a
/// click handler to each that passes the entry's label to `on_select`.
/// The whole list is rebuilt from `items` on every render.
#[component]
pub fn OptionList(
    /// Labels to render
    items: Vec<String>,

    /// Invoked with the label of the clicked entry
    on_select: Callback<String>,

    #[prop(into)]
    open: Signal<bool>,
) -> impl IntoView {
    view! {
        <ul class="dropdown-menu" class:show=move || open.get()>
            {items
                .into_iter()
                .map(|label| {
                    let selected = label.clone();
                    view! {
                        <li>
                            <div class="dropdown-item" on:click=move |_| on_select.run(selected.clone())>
                                {label}
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
