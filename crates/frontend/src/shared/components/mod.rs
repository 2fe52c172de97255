pub mod dropdown;
pub mod option_list;

pub use dropdown::Dropdown;
pub use option_list::OptionList;
