use crate::config::config;
use crate::layout::global_context::SurveyContext;
use crate::shared::components::Dropdown;
use contracts::domain::a002_answer_template::answer_template_names;
use contracts::shared::ui_config::SelectionTarget;
use leptos::prelude::*;

/// Выпадающий список шаблонов шкал ответов.
///
/// Only template names are rendered. The selected name goes to the label set
/// by `answer_selection_target`, which is the question-type label by default.
#[component]
pub fn AnswerTemplateDropdown() -> impl IntoView {
    let ctx = leptos::context::use_context::<SurveyContext>()
        .expect("SurveyContext context not found");
    let target = config().answer_selection_target;

    let on_select = Callback::new(move |label: String| {
        ctx.select(target, label);
    });

    view! {
        <Dropdown
            id="answerTypeDpdn"
            label=ctx.label(SelectionTarget::AnswerType)
            items=answer_template_names()
            on_select=on_select
        />
    }
}
