use contracts::shared::ui_config::TabConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub id: String,
    pub title: String,
}

impl From<&TabConfig> for TabItem {
    fn from(tab: &TabConfig) -> Self {
        Self {
            id: tab.id.clone(),
            title: tab.title.clone(),
        }
    }
}

/// Набор вкладок, не более одной активной
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<TabItem>,
    active: Option<String>,
}

impl TabStrip {
    /// The first tab starts active.
    pub fn new(tabs: Vec<TabItem>) -> Self {
        let active = tabs.first().map(|tab| tab.id.clone());
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Makes `id` the only active tab. Ids without a tab are accepted,
    /// leaving no rendered tab marked active.
    pub fn activate(&mut self, id: &str) {
        self.active = Some(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        TabStrip::new(vec![
            TabItem { id: "form_creation".into(), title: "Create".into() },
            TabItem { id: "preview".into(), title: "Preview".into() },
        ])
    }

    #[test]
    fn test_first_tab_active_by_default() {
        assert!(strip().is_active("form_creation"));
        assert!(!strip().is_active("preview"));
        assert!(!TabStrip::default().is_active("form_creation"));
    }

    #[test]
    fn test_activate_leaves_single_active() {
        let mut tabs = strip();
        tabs.activate("preview");
        let active: Vec<_> = tabs.tabs().iter().filter(|t| tabs.is_active(&t.id)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "preview");
    }

    #[test]
    fn test_unknown_id_accepted() {
        let mut tabs = strip();
        tabs.activate("missing");
        assert!(tabs.is_active("missing"));
        assert!(tabs.tabs().iter().all(|t| !tabs.is_active(&t.id)));
    }
}
