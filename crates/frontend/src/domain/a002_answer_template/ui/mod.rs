pub mod dropdown;

pub use dropdown::AnswerTemplateDropdown;
