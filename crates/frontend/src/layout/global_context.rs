use contracts::shared::ui_config::SelectionTarget;
use leptos::prelude::*;

pub const QUESTION_TYPE_PLACEHOLDER: &str = "Question Type";
pub const ANSWER_TYPE_PLACEHOLDER: &str = "Answer Type";

/// Текущие подписи выпадающих списков. История выбора не хранится.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    question_type: Option<String>,
    answer_type: Option<String>,
}

impl SelectionState {
    /// Writes `label` verbatim into the target, replacing the previous value.
    pub fn select(&mut self, target: SelectionTarget, label: String) {
        match target {
            SelectionTarget::QuestionType => self.question_type = Some(label),
            SelectionTarget::AnswerType => self.answer_type = Some(label),
        }
    }

    pub fn label(&self, target: SelectionTarget) -> &str {
        match target {
            SelectionTarget::QuestionType => self
                .question_type
                .as_deref()
                .unwrap_or(QUESTION_TYPE_PLACEHOLDER),
            SelectionTarget::AnswerType => self
                .answer_type
                .as_deref()
                .unwrap_or(ANSWER_TYPE_PLACEHOLDER),
        }
    }
}

#[derive(Clone, Copy)]
pub struct SurveyContext {
    pub selection: RwSignal<SelectionState>,
}

impl SurveyContext {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(SelectionState::default()),
        }
    }

    pub fn select(&self, target: SelectionTarget, label: String) {
        leptos::logging::log!("🔷 select: target={:?}, label='{}'", target, label);
        self.selection.update(|state| state.select(target, label));
    }

    pub fn label(&self, target: SelectionTarget) -> Signal<String> {
        let selection = self.selection;
        Signal::derive(move || selection.with(|state| state.label(target).to_string()))
    }
}

impl Default for SurveyContext {
    fn default() -> Self {
        Self::new()
    }
}
