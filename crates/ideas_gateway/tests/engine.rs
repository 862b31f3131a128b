use std::sync::{mpsc, Arc};
use std::time::Duration;

use ideas_gateway::{
    ChannelCompletionSink, ContentGateway, EngineEvent, EngineHandle, GatewayError,
    GatewaySettings, ListingPage, PublishOrder, RemoteItem, RemoteParams,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Answers with one item named after the page, slower for lower pages.
struct DelayedGateway;

#[async_trait::async_trait]
impl ContentGateway for DelayedGateway {
    async fn fetch(&self, params: &RemoteParams) -> Result<ListingPage, GatewayError> {
        let delay = 300u64.saturating_sub(u64::from(params.page_number) * 100);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(ListingPage {
            items: vec![RemoteItem {
                id: params.page_number.to_string(),
                title: format!("page {}", params.page_number),
                published_at: None,
                thumbnail_url: None,
            }],
            total_count: 30,
        })
    }
}

fn completed_id(event: EngineEvent) -> u64 {
    match event {
        EngineEvent::FetchCompleted { request_id, .. } => request_id,
    }
}

#[test]
fn overlapping_requests_all_complete_in_resolution_order() {
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::with_gateway(
        Arc::new(DelayedGateway),
        Arc::new(ChannelCompletionSink::new(tx)),
    )
    .expect("engine");

    engine.fetch(1, RemoteParams::build(1, 10, PublishOrder::Newest));
    engine.fetch(2, RemoteParams::build(2, 10, PublishOrder::Newest));

    let first = rx.recv_timeout(Duration::from_secs(5)).expect("first");
    let second = rx.recv_timeout(Duration::from_secs(5)).expect("second");
    assert_eq!(completed_id(first), 2);
    assert_eq!(completed_id(second), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_gateway_failures_with_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        GatewaySettings {
            base_url: server.uri(),
            ..GatewaySettings::default()
        },
        Arc::new(ChannelCompletionSink::new(tx)),
    )
    .expect("engine");
    engine.fetch(9, RemoteParams::build(1, 10, PublishOrder::Oldest));

    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("completion");
    match event {
        EngineEvent::FetchCompleted { request_id, result } => {
            assert_eq!(request_id, 9);
            assert!(matches!(
                result,
                Err(GatewayError::HttpError { status: 503, .. })
            ));
        }
    }
}
