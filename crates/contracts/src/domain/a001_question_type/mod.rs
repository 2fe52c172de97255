pub mod catalog;

pub use catalog::{question_type_labels, question_types, QuestionTypeLabel};
