pub mod catalog;

pub use catalog::{answer_template_names, answer_templates, AnswerScaleTemplate};
