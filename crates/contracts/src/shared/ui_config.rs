//! Настройки UI конструктора опросов.
//!
//! Loaded from TOML. Every key is optional, missing keys keep their defaults.

use anyhow::Context;
use serde::Deserialize;

use super::fragment::FragmentId;

/// Какую метку обновляет выбор в списке шаблонов ответов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTarget {
    /// Метка выпадающего списка типов вопросов (исходное поведение страницы)
    #[default]
    QuestionType,
    AnswerType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SurveyUiConfig {
    pub initial_fragment: String,
    pub fragment_root: String,
    pub container_id: String,
    pub nav_id: String,
    pub stuck_class: String,
    /// Bind tab clicks to fragment navigation
    pub tab_navigation: bool,
    pub answer_selection_target: SelectionTarget,
    pub tabs: Vec<TabConfig>,
}

impl Default for SurveyUiConfig {
    fn default() -> Self {
        Self {
            initial_fragment: "survey_page".to_string(),
            fragment_root: "/".to_string(),
            container_id: "pageRow".to_string(),
            nav_id: "optionTabs".to_string(),
            stuck_class: "fixed-top".to_string(),
            tab_navigation: false,
            answer_selection_target: SelectionTarget::QuestionType,
            tabs: vec![TabConfig {
                id: "form_creation".to_string(),
                title: "Create Survey".to_string(),
            }],
        }
    }
}

impl SurveyUiConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("Failed to parse survey UI config")
    }

    pub fn initial_fragment(&self) -> FragmentId {
        FragmentId::new(self.initial_fragment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_gives_defaults() {
        let config = SurveyUiConfig::from_toml_str("").unwrap();
        assert_eq!(config, SurveyUiConfig::default());
        assert_eq!(config.initial_fragment().as_str(), "survey_page");
        assert_eq!(config.answer_selection_target, SelectionTarget::QuestionType);
        assert!(!config.tab_navigation);
    }

    #[test]
    fn test_partial_override() {
        let config = SurveyUiConfig::from_toml_str(
            r#"
            tab_navigation = true
            answer_selection_target = "answer_type"

            [[tabs]]
            id = "form_creation"
            title = "Create"

            [[tabs]]
            id = "preview"
            title = "Preview"
            "#,
        )
        .unwrap();

        assert!(config.tab_navigation);
        assert_eq!(config.answer_selection_target, SelectionTarget::AnswerType);
        assert_eq!(config.tabs.len(), 2);
        assert_eq!(config.tabs[1].id, "preview");
        assert_eq!(config.stuck_class, "fixed-top");
        assert_eq!(config.fragment_root, "/");
    }

    #[test]
    fn test_invalid_source_is_error() {
        assert!(SurveyUiConfig::from_toml_str("tab_navigation = \"maybe\"").is_err());
        assert!(SurveyUiConfig::from_toml_str("[[[").is_err());
    }
}
