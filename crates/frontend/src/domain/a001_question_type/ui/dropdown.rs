use crate::layout::global_context::SurveyContext;
use crate::shared::components::Dropdown;
use contracts::domain::a001_question_type::question_type_labels;
use contracts::shared::ui_config::SelectionTarget;
use leptos::prelude::*;

/// Выпадающий список типов вопросов
#[component]
pub fn QuestionTypeDropdown() -> impl IntoView {
    let ctx = leptos::context::use_context::<SurveyContext>()
        .expect("SurveyContext context not found");

    let on_select = Callback::new(move |label: String| {
        ctx.select(SelectionTarget::QuestionType, label);
    });

    view! {
        <Dropdown
            id="questionTypeDpdn"
            label=ctx.label(SelectionTarget::QuestionType)
            items=question_type_labels()
            on_select=on_select
        />
    }
}
