use console_logging::{console_info, console_warn};
use scrapeboard_client::{ClientEvent, ClientHandle};
use scrapeboard_core::{Effect, Msg};

/// Forwards core effects to the client bridge and turns its completions
/// back into messages for the state machine.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(client: ClientHandle) -> Self {
        Self { client }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Dispatch {
                    panel,
                    token,
                    spec,
                } => {
                    console_info!(
                        "dispatch panel={panel} token={token} {:?} {}",
                        spec.method,
                        spec.path
                    );
                    self.client.dispatch(panel, token, spec);
                }
            }
        }
    }

    pub fn try_recv(&self) -> Option<Msg> {
        self.client.try_recv().map(|event| match event {
            ClientEvent::Completed {
                panel,
                token,
                result,
            } => {
                if let Err(err) = &result {
                    console_warn!("panel={panel} token={token} failed: {} ({})", err, err.kind);
                }
                Msg::RequestCompleted {
                    panel,
                    token,
                    result: result.map_err(|err| err.message),
                }
            }
        })
    }
}
