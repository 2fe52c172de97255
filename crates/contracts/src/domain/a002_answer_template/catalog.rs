use serde::Serialize;

// ============================================================================
// Answer scale template
// ============================================================================

/// Шаблон шкалы ответов: название, варианты и объявленное число вариантов.
///
/// `options.len() == max_count` is a convention of the catalog data, it is not
/// enforced. Use [`AnswerScaleTemplate::is_consistent`] to check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerScaleTemplate {
    #[serde(rename = "answer_list_name")]
    pub name: &'static str,

    #[serde(rename = "list")]
    pub options: &'static [&'static str],

    pub max_count: usize,
}

impl AnswerScaleTemplate {
    pub fn is_consistent(&self) -> bool {
        self.options.len() == self.max_count
    }
}

// ============================================================================
// Catalog
// ============================================================================

// "Yes - No" присутствует дважды: потребители могут опираться на индексы
const ANSWER_TEMPLATES: &[AnswerScaleTemplate] = &[
    AnswerScaleTemplate {
        name: "Agree - Disagree",
        options: &[
            "Strongly agree",
            "Agree",
            "Somewhat agree",
            "Neither agree nor disagree",
            "Somewhat disagree",
            "Disagree",
            "Strongly disagree",
        ],
        max_count: 7,
    },
    AnswerScaleTemplate {
        name: "Satisfied - Dissatisfied",
        options: &[
            "Very satisfied",
            "Satisfied",
            "Somewhat satisfied",
            "Neither satisfied nor dissatisfied",
            "Somewhat dissatisfied",
            "Dissatisfied",
            "Very dissatisfied",
        ],
        max_count: 7,
    },
    AnswerScaleTemplate {
        name: "Yes - No",
        options: &["Yes", "No"],
        max_count: 2,
    },
    AnswerScaleTemplate {
        name: "Likely - Unlikely",
        options: &[
            "Very likely",
            "Likely",
            "Somewhat likely",
            "Neither likely nor unlikely",
            "Somewhat unlikely",
            "Unlikely",
            "Very unlikely",
        ],
        max_count: 7,
    },
    AnswerScaleTemplate {
        name: "Familiar - Not familiar",
        options: &[
            "Extremely familiar",
            "Very familiar",
            "Somewhat familiar",
            "Not so familiar",
            "Not at all familiar",
        ],
        max_count: 5,
    },
    AnswerScaleTemplate {
        name: "Yes - No",
        options: &["Yes", "No"],
        max_count: 2,
    },
];

/// Read-only access to the answer-scale template catalog.
pub fn answer_templates() -> &'static [AnswerScaleTemplate] {
    ANSWER_TEMPLATES
}

/// Template names as rendered into the answer-type menu. Only `name` is shown.
pub fn answer_template_names() -> Vec<String> {
    ANSWER_TEMPLATES
        .iter()
        .map(|template| template.name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_templates_with_duplicate_yes_no() {
        let names = answer_template_names();
        assert_eq!(names.len(), 6);
        assert_eq!(names.iter().filter(|n| n.as_str() == "Yes - No").count(), 2);
        assert_eq!(names[2], "Yes - No");
        assert_eq!(names[5], "Yes - No");
        assert_eq!(answer_templates()[2], answer_templates()[5]);
    }

    #[test]
    fn test_names_are_deterministic() {
        assert_eq!(answer_template_names(), answer_template_names());
    }

    #[test]
    fn test_catalog_data_is_consistent() {
        for template in answer_templates() {
            assert!(template.is_consistent(), "{} is inconsistent", template.name);
        }
    }

    #[test]
    fn test_inconsistent_template_detected() {
        let template = AnswerScaleTemplate {
            name: "Broken",
            options: &["Only one"],
            max_count: 3,
        };
        assert!(!template.is_consistent());
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(answer_templates()[2]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "answer_list_name": "Yes - No",
                "list": ["Yes", "No"],
                "max_count": 2
            })
        );
    }
}
