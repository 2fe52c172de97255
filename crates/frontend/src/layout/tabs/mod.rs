//! Вкладки навигационной панели
//!
//! Содержит:
//! - `strip` - набор вкладок и единственная активная вкладка

pub mod strip;

pub use strip::{TabItem, TabStrip};
