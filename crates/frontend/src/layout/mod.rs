pub mod global_context;
pub mod navbar;
pub mod page_loader;
pub mod scroll_guard;
pub mod tabs;

use crate::domain::a001_question_type::ui::QuestionTypeDropdown;
use crate::domain::a002_answer_template::ui::AnswerTemplateDropdown;
use leptos::prelude::*;
use navbar::Navbar;
use page_loader::PageRow;

/// Каркас страницы конструктора опросов.
///
/// ```text
/// +------------------------------------------+
/// |        Navbar (#optionTabs)               |
/// +------------------------------------------+
/// |  Question Type ▾  |  Answer Type ▾       |
/// +------------------------------------------+
/// |        PageRow (#pageRow, fragment)       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="container-fluid">
            <Navbar />

            <div class="row survey-toolbar">
                <div class="col-auto">
                    <QuestionTypeDropdown />
                </div>
                <div class="col-auto">
                    <AnswerTemplateDropdown />
                </div>
            </div>

            <PageRow />
        </div>
    }
}
