//! Ideas gateway: remote query construction, content fetching and the
//! background engine that executes fetch effects.
mod engine;
mod envelope;
mod gateway;
mod params;
mod types;

pub use engine::{ChannelCompletionSink, CompletionSink, EngineHandle};
pub use envelope::{parse_listing, parse_publish_date};
pub use gateway::{ContentGateway, GatewaySettings, ReqwestGateway};
pub use params::{
    sort_token, RemoteParams, APPENDED_RELATIONS, APPEND_KEY, NEWEST_FIRST_TOKEN,
    OLDEST_FIRST_TOKEN, PAGE_NUMBER_KEY, PAGE_SIZE_KEY, SORT_KEY,
};
pub use types::{
    EngineError, EngineEvent, GatewayError, ListingPage, PublishOrder, RemoteItem, RequestId,
};
