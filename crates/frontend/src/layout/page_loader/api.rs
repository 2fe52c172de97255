use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to read fragment body: {0}")]
    Body(String),
}

/// Загрузить HTML-фрагмент по URL
pub async fn fetch_fragment(url: &str) -> Result<String, FragmentError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FragmentError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FragmentError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FragmentError::Body(e.to_string()))
}
