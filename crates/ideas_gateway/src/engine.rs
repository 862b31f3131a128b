use std::sync::{mpsc, Arc};
use std::thread;

use ideas_logging::{ideas_debug, ideas_warn};

use crate::gateway::{ContentGateway, GatewaySettings, ReqwestGateway};
use crate::{EngineError, EngineEvent, RemoteParams, RequestId};

/// Receives completions from the background runtime.
pub trait CompletionSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelCompletionSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelCompletionSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl CompletionSink for ChannelCompletionSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        params: RemoteParams,
    },
}

/// Runs gateway requests on a background tokio runtime.
///
/// Requests are never cancelled or de-duplicated; each completion is reported
/// with the id it was issued under and the caller decides what is stale.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: GatewaySettings,
        sink: Arc<dyn CompletionSink>,
    ) -> Result<Self, EngineError> {
        let gateway = ReqwestGateway::new(settings)?;
        Self::with_gateway(Arc::new(gateway), sink)
    }

    pub fn with_gateway(
        gateway: Arc<dyn ContentGateway>,
        sink: Arc<dyn CompletionSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let gateway = gateway.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(gateway.as_ref(), command, sink.as_ref()).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, params: RemoteParams) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, params })
            .is_err()
        {
            ideas_warn!("Engine stopped; dropping request {}", request_id);
        }
    }
}

async fn handle_command(
    gateway: &dyn ContentGateway,
    command: EngineCommand,
    sink: &dyn CompletionSink,
) {
    match command {
        EngineCommand::Fetch { request_id, params } => {
            let result = gateway.fetch(&params).await;
            ideas_debug!("Request {} completed ok={}", request_id, result.is_ok());
            sink.emit(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
