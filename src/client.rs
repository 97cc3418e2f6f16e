//! Paginated REST fetching.
//!
//! Both external APIs answer listing requests with a page envelope carrying
//! the items plus absolute `self`/`last` URLs whose `page` query parameter
//! locates the page. `fetch_all` walks pages until the reported current page
//! reaches the reported last page; the first failing request aborts the run.

use crate::error::{ExportError, Result};
use crate::ui;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Wire shape of one page as returned by the server.
#[derive(Debug, Deserialize)]
struct PageEnvelope<T> {
    list: Vec<T>,
    #[serde(rename = "self")]
    self_url: String,
    last: String,
}

/// One fetched page with its pagination metadata normalized to indexes.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current: u64,
    pub last: u64,
}

/// HTTP client bound to one REST API base URL.
pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    pub fn new(api_base: &str) -> Result<Self> {
        let mut base = api_base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch a single page of `path`, requesting the given page index.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        page: u64,
    ) -> Result<Page<T>> {
        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("page", &page.to_string());
        }

        ui::status_message(&format!("Fetching {url}"));
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ExportError::RequestFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let envelope: PageEnvelope<T> = response.json().await?;
        Ok(Page {
            items: envelope.list,
            current: page_number(&envelope.self_url),
            last: page_number(&envelope.last),
        })
    }

    /// Fetch every page of `path`, concatenating items in server order.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = 0;

        loop {
            let page = self.fetch_page(path, query, next).await?;
            items.extend(page.items);
            if page.current >= page.last {
                break;
            }
            next = page.current + 1;
        }

        Ok(items)
    }
}

/// Integer `page` query parameter of an absolute URL, 0 when absent.
fn page_number(raw: &str) -> u64 {
    Url::parse(raw)
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key.as_ref() == "page")
                .and_then(|(_, value)| value.parse().ok())
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_reads_the_page_parameter() {
        assert_eq!(page_number("https://example.org/node.json?type=a&page=7"), 7);
    }

    #[test]
    fn page_number_defaults_to_zero_when_absent() {
        assert_eq!(page_number("https://example.org/node.json?type=a"), 0);
        assert_eq!(page_number("https://example.org/node.json"), 0);
    }

    #[test]
    fn page_number_defaults_to_zero_when_unparseable() {
        assert_eq!(page_number("not a url"), 0);
        assert_eq!(page_number("https://example.org/node.json?page=three"), 0);
    }
}
