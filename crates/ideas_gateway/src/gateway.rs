use std::time::Duration;

use ideas_logging::ideas_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;

use crate::envelope::parse_listing;
use crate::{GatewayError, ListingPage, RemoteParams};

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub endpoint: String,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint: "/api/ideas".to_string(),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait ContentGateway: Send + Sync {
    async fn fetch(&self, params: &RemoteParams) -> Result<ListingPage, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(&settings.base_url)
            .and_then(|base| base.join(&settings.endpoint))
            .map_err(|err| GatewayError::InvalidEndpoint {
                message: format!("{}{}: {err}", settings.base_url, settings.endpoint),
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| GatewayError::Network {
            message: err.to_string(),
        })?;

        Ok(Self { endpoint, client })
    }

    /// Full request URL for `params`.
    pub fn request_url(&self, params: &RemoteParams) -> Url {
        let mut url = self.endpoint.clone();
        params.apply_to(&mut url);
        url
    }
}

#[async_trait::async_trait]
impl ContentGateway for ReqwestGateway {
    async fn fetch(&self, params: &RemoteParams) -> Result<ListingPage, GatewayError> {
        let url = self.request_url(params);
        ideas_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpError {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if !content_type.as_deref().is_some_and(is_json_content_type) {
            return Err(GatewayError::UnexpectedContentType { content_type });
        }

        let body = response.bytes().await.map_err(network_error)?;
        parse_listing(&body)
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

fn network_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Network {
        message: err.to_string(),
    }
}
