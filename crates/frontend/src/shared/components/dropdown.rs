use super::option_list::OptionList;
use leptos::prelude::*;

/// Dropdown component - кнопка с подписью и меню вариантов
///
/// The menu closes after a selection.
#[component]
pub fn Dropdown(
    /// DOM id of the toggle button
    #[prop(into)]
    id: String,

    /// Text shown on the toggle button
    #[prop(into)]
    label: Signal<String>,

    items: Vec<String>,

    on_select: Callback<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let toggle = move |_| {
        is_open.update(|open| *open = !*open);
    };

    let select = Callback::new(move |value: String| {
        is_open.set(false);
        on_select.run(value);
    });

    view! {
        <div class="dropdown">
            <button
                id=id
                class="btn btn-outline-secondary dropdown-toggle"
                type="button"
                aria-expanded=move || is_open.get().to_string()
                on:click=toggle
            >
                {move || label.get()}
            </button>
            <OptionList items=items on_select=select open=is_open />
        </div>
    }
}
