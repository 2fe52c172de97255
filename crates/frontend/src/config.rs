//! Конфигурация UI, встроенная в бандл при сборке (`survey.toml`).

use contracts::domain::a002_answer_template::answer_templates;
use contracts::shared::ui_config::SurveyUiConfig;
use once_cell::sync::Lazy;

const EMBEDDED_CONFIG: &str = include_str!("../survey.toml");

static CONFIG: Lazy<SurveyUiConfig> = Lazy::new(|| {
    match SurveyUiConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{:#}, falling back to defaults", e);
            SurveyUiConfig::default()
        }
    }
});

pub fn config() -> &'static SurveyUiConfig {
    &CONFIG
}

/// Logs every answer template whose option count differs from `max_count`.
/// The data is kept as is.
pub fn report_catalog_consistency() {
    for (index, template) in answer_templates().iter().enumerate() {
        if !template.is_consistent() {
            log::warn!(
                "Answer template #{} '{}' declares {} options but lists {}",
                index,
                template.name,
                template.max_count,
                template.options.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ui_config::SelectionTarget;

    #[test]
    fn test_embedded_config_parses() {
        let config = SurveyUiConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.initial_fragment().as_str(), "survey_page");
        assert_eq!(config.container_id, "pageRow");
        assert!(!config.tab_navigation);
        assert_eq!(config.answer_selection_target, SelectionTarget::QuestionType);
    }
}
