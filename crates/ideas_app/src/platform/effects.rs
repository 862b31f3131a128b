use std::sync::{mpsc, Arc};

use ideas_core::{ContentItem, Effect, FailureKind, FetchFailure, Msg, SortOrder, UrlQuery};
use ideas_gateway::{
    CompletionSink, EngineError, EngineEvent, EngineHandle, GatewayError, GatewaySettings,
    ListingPage, PublishOrder, RemoteItem, RemoteParams,
};
use ideas_logging::{ideas_debug, ideas_info};

use super::app::AppEvent;
use super::history::{History, Location};

/// Forwards engine completions into the app's event channel.
struct AppEventSink {
    tx: mpsc::Sender<AppEvent>,
}

impl CompletionSink for AppEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Engine(event));
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: GatewaySettings, tx: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(AppEventSink { tx }))?;
        Ok(Self { engine })
    }

    /// Executes effects in order. Returns whether the current route changed.
    pub fn run(&self, effects: Vec<Effect>, history: &mut History) -> bool {
        let mut navigated = false;
        for effect in effects {
            match effect {
                Effect::ReplaceUrl { query } => {
                    ideas_debug!("ReplaceUrl {}", query);
                    history.replace_query(query);
                }
                Effect::Navigate { path } => {
                    ideas_info!("Navigate {}", path);
                    history.push(Location::parse(&path));
                    navigated = true;
                }
                Effect::FetchPage { request_id, query } => {
                    ideas_info!("FetchPage request_id={} query={}", request_id, query.encode());
                    self.engine.fetch(request_id, remote_params(query));
                }
            }
        }
        navigated
    }
}

pub(crate) fn remote_params(query: UrlQuery) -> RemoteParams {
    RemoteParams::build(query.page, query.page_size.get(), map_order(query.sort))
}

fn map_order(sort: SortOrder) -> PublishOrder {
    match sort {
        SortOrder::Newest => PublishOrder::Newest,
        SortOrder::Oldest => PublishOrder::Oldest,
    }
}

/// Turns an engine completion into the matching core message.
pub(crate) fn completion_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            request_id,
            result: Ok(page),
        } => {
            let ListingPage { items, total_count } = page;
            Msg::FetchSucceeded {
                request_id,
                items: items.into_iter().map(map_item).collect(),
                total_count,
            }
        }
        EngineEvent::FetchCompleted {
            request_id,
            result: Err(err),
        } => Msg::FetchFailed {
            request_id,
            failure: map_failure(&err),
        },
    }
}

fn map_item(item: RemoteItem) -> ContentItem {
    ContentItem {
        id: item.id,
        title: item.title,
        published_at: item.published_at,
        thumbnail_url: item.thumbnail_url,
    }
}

fn map_failure(err: &GatewayError) -> FetchFailure {
    let kind = match err {
        GatewayError::HttpError { status, .. } => FailureKind::Http { status: *status },
        GatewayError::UnexpectedContentType { .. } => FailureKind::UnexpectedContentType,
        GatewayError::MalformedResponse { .. } => FailureKind::MalformedResponse,
        GatewayError::Network { .. } | GatewayError::InvalidEndpoint { .. } => {
            FailureKind::Network
        }
    };
    FetchFailure::new(kind, err.to_string())
}
