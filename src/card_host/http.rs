use std::fmt;

use async_trait::async_trait;
use log::{debug, trace};
use reqwest::{Client, StatusCode};

use super::{CardHost, FetchError, FetchResponse, UrlTemplate};
use crate::card_name::CardName;

/// Fetches cards over plain HTTP(S). Requests carry no credentials and no
/// timeout; a host that never answers stalls the caller.
pub struct HttpCardHost {
    template: UrlTemplate,
    client: Client,
}

impl fmt::Debug for HttpCardHost {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "HttpCardHost({:?})", self.template)
    }
}

impl HttpCardHost {
    pub fn new(template: UrlTemplate) -> Self {
        Self {
            template,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CardHost for HttpCardHost {
    async fn fetch(&self, card: &CardName) -> Result<FetchResponse, FetchError> {
        let url = self.template.url_for(card);
        debug!("GET {}", url);

        let wrap = |source: reqwest::Error| FetchError {
            card: card.clone(),
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(wrap)?;
        let status = response.status();
        trace!("{} answered with {}", url, status);

        if status != StatusCode::OK {
            return Ok(FetchResponse::Rejected(status));
        }

        let body = response.bytes().await.map_err(wrap)?;

        Ok(FetchResponse::Ok(body.to_vec()))
    }
}
