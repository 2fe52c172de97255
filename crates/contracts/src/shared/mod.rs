pub mod fragment;
pub mod ui_config;
