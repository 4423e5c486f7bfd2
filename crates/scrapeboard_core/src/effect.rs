use crate::{PanelId, RequestSpec, RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Execute one outbound request for the panel. The token must be echoed
    /// back in the completion message so stale results can be discarded.
    Dispatch {
        panel: PanelId,
        token: RequestToken,
        spec: RequestSpec,
    },
}
