use std::future::Future;
use std::pin::Pin;

use reqwest::{header, Client};
use serde_json::Value;

use crate::constants::{ACCEPT, REQUEST_TIMEOUT, USER_AGENT};
use crate::error::FetchError;

pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, FetchError>> + Send + 'a>>;

/// Issues one GET and returns the decoded JSON body.
pub trait JsonFetcher: Send + Sync {
    fn get_json<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

/// Production fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

impl JsonFetcher for ReqwestFetcher {
    fn get_json<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            tracing::debug!(url, "GET");
            let response = self.client.get(url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        })
    }
}
