use std::collections::HashMap;
use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::{FetchedResource, RemoteFetcher};

/// In-memory URL responses keyed by the full URL string.
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, FetchedResource>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        mut self,
        url: &str,
        status: u16,
        content_type: Option<&str>,
        body: &str,
    ) -> Self {
        let key = Url::parse(url).expect("valid test url").to_string();
        self.responses.insert(
            key,
            FetchedResource {
                status,
                content_type: content_type.map(str::to_string),
                body: body.to_string(),
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl RemoteFetcher for FakeFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedResource, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses.get(url.as_str()).cloned().ok_or_else(|| AppError::Network {
            url: url.to_string(),
            details: "no fake response registered".into(),
        })
    }
}
