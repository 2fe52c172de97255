//! Загрузка HTML-фрагментов в контейнер страницы.
//!
//! Fetches are fire-and-forget: nothing awaits them and a failed load leaves
//! the container as it was.

pub mod api;
pub mod container;

pub use container::PageRow;

use crate::config::config;
use crate::layout::tabs::{TabItem, TabStrip};
use crate::shared::api_utils::fragment_url;
use api::fetch_fragment;
use contracts::shared::fragment::FragmentId;
use contracts::shared::ui_config::SurveyUiConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// URL requested by [`PageLoader::initialize`].
pub fn initial_request(config: &SurveyUiConfig) -> String {
    fragment_url(&config.fragment_root, &config.initial_fragment())
}

#[derive(Clone, Copy)]
pub struct PageLoader {
    /// HTML последнего успешно загруженного фрагмента
    pub content: RwSignal<Option<String>>,
    pub tabs: RwSignal<TabStrip>,
}

impl PageLoader {
    pub fn new() -> Self {
        let tabs = config().tabs.iter().map(TabItem::from).collect();
        Self {
            content: RwSignal::new(None),
            tabs: RwSignal::new(TabStrip::new(tabs)),
        }
    }

    pub fn initialize(&self) {
        let config = config();
        self.load(config.initial_fragment(), initial_request(config));
    }

    /// Activates the tab `control_id` and loads `{control_id}_page`.
    /// The id is not validated.
    pub fn navigate_to(&self, control_id: &str) {
        self.tabs.update(|tabs| tabs.activate(control_id));
        let id = FragmentId::for_control(control_id);
        let url = fragment_url(&config().fragment_root, &id);
        self.load(id, url);
    }

    fn load(&self, id: FragmentId, url: String) {
        log::info!("Loading fragment '{}' from {}", id, url);
        let content = self.content;
        spawn_local(async move {
            match fetch_fragment(&url).await {
                Ok(html) => content.set(Some(html)),
                Err(e) => log::warn!("Fragment '{}' not loaded: {}", id, e),
            }
        });
    }
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_request_is_survey_page() {
        assert_eq!(initial_request(&SurveyUiConfig::default()), "/survey_page.html");
    }

    #[test]
    fn test_initial_request_respects_config() {
        let config = SurveyUiConfig {
            initial_fragment: "welcome_page".to_string(),
            fragment_root: "/static/".to_string(),
            ..SurveyUiConfig::default()
        };
        assert_eq!(initial_request(&config), "/static/welcome_page.html");
    }
}
