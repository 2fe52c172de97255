/// Название типа вопроса, например "Multiple Choice"
pub type QuestionTypeLabel = &'static str;

/// Справочник типов вопросов в порядке отображения в выпадающем списке
const QUESTION_TYPES: &[QuestionTypeLabel] = &[
    "Multiple Choice",
    "Dropdown",
    "Checkbox",
    "Matrix/Rating Scale",
    "Star Rating",
    "Ranking",
    "Single Textbox",
    "Slider",
    "Comment Box",
    "Multiple Textbox",
    "Matrix of Dropdown menus",
    "Date/Time",
];

/// Read-only access to the question-type catalog.
pub fn question_types() -> &'static [QuestionTypeLabel] {
    QUESTION_TYPES
}

/// Labels exactly as they are rendered into the question-type menu.
pub fn question_type_labels() -> Vec<String> {
    QUESTION_TYPES.iter().map(|label| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_catalog_order() {
        let labels = question_type_labels();
        assert_eq!(labels.len(), question_types().len());
        assert_eq!(labels.len(), 12);
        for (rendered, label) in labels.iter().zip(question_types()) {
            assert_eq!(rendered, label);
        }
        assert_eq!(labels.first().map(String::as_str), Some("Multiple Choice"));
        assert_eq!(labels.last().map(String::as_str), Some("Date/Time"));
    }

    #[test]
    fn test_labels_are_deterministic() {
        assert_eq!(question_type_labels(), question_type_labels());
    }
}
