use chrono::NaiveDate;

/// Caller-assigned id echoed back with each completion.
pub type RequestId = u64;

/// Publish-date ordering understood by the content service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOrder {
    Newest,
    Oldest,
}

/// A listed item after validation at the gateway boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteItem {
    pub id: String,
    pub title: String,
    pub published_at: Option<NaiveDate>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPage {
    pub items: Vec<RemoteItem>,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        request_id: RequestId,
        result: Result<ListingPage, GatewayError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("API error: {status} {status_text}")]
    HttpError { status: u16, status_text: String },
    #[error(
        "Server returned {} instead of JSON. Check API configuration.",
        .content_type.as_deref().unwrap_or("no content type")
    )]
    UnexpectedContentType { content_type: Option<String> },
    #[error("Network error occurred: {message}")]
    Network { message: String },
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
    #[error("Invalid endpoint configuration: {message}")]
    InvalidEndpoint { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
