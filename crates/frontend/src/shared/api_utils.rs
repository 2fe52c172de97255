//! URL helpers for fragment requests
//!
//! Fragments are served by the same origin that serves the page, so every URL
//! is a root-relative path.

use contracts::shared::fragment::FragmentId;

/// Build the request path for a fragment
///
/// Each `/`-separated segment of the fragment id is percent-encoded, the `/`
/// separators themselves are kept, `root` is used as is.
///
/// # Example
/// ```rust
/// use contracts::shared::fragment::FragmentId;
/// use frontend::shared::api_utils::fragment_url;
///
/// assert_eq!(fragment_url("/", &FragmentId::new("survey_page")), "/survey_page.html");
/// ```
pub fn fragment_url(root: &str, id: &FragmentId) -> String {
    let encoded = id
        .as_str()
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    let encoded = FragmentId::new(encoded);
    encoded.path(root)
}
