use std::fmt;

/// Идентификатор HTML-фрагмента страницы, например `survey_page`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentId(String);

impl FragmentId {
    const SUFFIX: &'static str = "_page";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fragment loaded for a navigation control: `form_creation` -> `form_creation_page`.
    pub fn for_control(control_id: &str) -> Self {
        Self(format!("{}{}", control_id, Self::SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Путь к ресурсу фрагмента относительно `root`
    pub fn path(&self, root: &str) -> String {
        format!("{}{}.html", root, self.0)
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_fragment_path() {
        assert_eq!(FragmentId::new("survey_page").path("/"), "/survey_page.html");
    }

    #[test]
    fn test_control_fragment() {
        let id = FragmentId::for_control("form_creation");
        assert_eq!(id.as_str(), "form_creation_page");
        assert_eq!(id.path("/"), "/form_creation_page.html");
        assert_eq!(id.path("/fragments/"), "/fragments/form_creation_page.html");
    }
}
