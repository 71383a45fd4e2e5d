mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::card_name::CardName;

pub use self::http::HttpCardHost;

/// Where the card art lives unless told otherwise.
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://opengameart.org/sites/default/files/styles/medium/public/cards-{card_name}.png";

const PLACEHOLDER: &str = "{card_name}";

/// A URL with a `{card_name}` hole in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new<S: Into<String>>(template: S) -> Result<Self, TemplateError> {
        let template = template.into();

        if !template.contains(PLACEHOLDER) {
            return Err(TemplateError::MissingPlaceholder { template });
        }

        Ok(Self(template))
    }

    pub fn url_for(&self, card: &CardName) -> String {
        self.0.replace(PLACEHOLDER, card.as_str())
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self(DEFAULT_URL_TEMPLATE.to_owned())
    }
}

impl std::str::FromStr for UrlTemplate {
    type Err = TemplateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("URL template '{template}' does not contain a {{card_name}} placeholder")]
    MissingPlaceholder { template: String },
}

/// What the host answered for a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    /// HTTP 200, with the raw body.
    Ok(Vec<u8>),

    /// Any other status. The body is thrown away.
    Rejected(StatusCode),
}

/// The request itself failed, so there is no status to look at.
#[derive(Debug, Error)]
#[error("could not fetch card '{card}' from {url}")]
pub struct FetchError {
    pub card: CardName,
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

#[async_trait]
pub trait CardHost {
    async fn fetch(&self, card: &CardName) -> Result<FetchResponse, FetchError>;
}
