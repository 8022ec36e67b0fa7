//! Remote document fetch port definition.

use url::Url;

use crate::domain::AppError;

/// Raw response for a URL import, before admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResource {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    /// Response body decoded as text.
    pub body: String,
}

impl FetchedResource {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for retrieving URL imports.
pub trait RemoteFetcher {
    /// Perform the request. Transport failures are errors; any HTTP status is a response.
    fn fetch(&self, url: &Url) -> Result<FetchedResource, AppError>;
}
