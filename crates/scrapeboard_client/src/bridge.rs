use std::sync::{mpsc, Arc};
use std::thread;

use console_logging::console_debug;
use scrapeboard_core::{PanelId, RequestSpec, RequestToken};

use crate::transport::{ClientSettings, ReqwestTransport, Transport};
use crate::{ApiError, ClientEvent};

enum ClientCommand {
    Execute {
        panel: PanelId,
        token: RequestToken,
        spec: RequestSpec,
    },
}

/// Bridge between a synchronous caller and the async transport: commands go
/// in over a channel, completions come back out, and a background thread
/// owns the tokio runtime. Requests are never cancelled; a superseded
/// request simply completes into an event the core will discard.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let transport = Arc::new(ReqwestTransport::new(settings)?);
        Ok(Self::with_transport(transport))
    }

    /// Builds a handle over any transport; tests use this to substitute a
    /// scripted service.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let transport = transport.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(transport.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn dispatch(&self, panel: PanelId, token: RequestToken, spec: RequestSpec) {
        console_debug!(
            "dispatch panel={panel} token={token} path={}",
            spec.path
        );
        let _ = self.cmd_tx.send(ClientCommand::Execute {
            panel,
            token,
            spec,
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    transport: &dyn Transport,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Execute {
            panel,
            token,
            spec,
        } => {
            let result = transport.execute(panel, &spec).await;
            let _ = event_tx.send(ClientEvent::Completed {
                panel,
                token,
                result,
            });
        }
    }
}
