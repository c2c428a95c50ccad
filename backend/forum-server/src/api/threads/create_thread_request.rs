use serde::Deserialize;

/// Body of `POST /threads`; the author is the authenticated caller
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    pub title: String,
    pub content: String,
}
