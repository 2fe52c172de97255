pub mod a001_question_type;
pub mod a002_answer_template;
