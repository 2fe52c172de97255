pub mod dropdown;

pub use dropdown::QuestionTypeDropdown;
