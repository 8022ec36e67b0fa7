//! Fetch-and-admit step for URL imports.

use url::Url;

use crate::domain::{Admission, AppError, admit};
use crate::ports::RemoteFetcher;

/// Fetch `url` and return its trimmed body if it is admissible text.
pub fn fetch_admitted<F: RemoteFetcher + ?Sized>(
    fetcher: &F,
    url: &Url,
) -> Result<String, AppError> {
    let resource = fetcher.fetch(url)?;
    if !resource.is_success() {
        return Err(AppError::HttpStatus { url: url.to_string(), status: resource.status });
    }

    match admit(resource.content_type.as_deref(), url.path(), &resource.body) {
        Admission::Accepted { text } => Ok(text),
        Admission::Rejected { content_type } => {
            Err(AppError::UnsupportedContentType { content_type, url: url.to_string() })
        }
    }
}
