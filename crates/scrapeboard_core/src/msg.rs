use crate::{Field, PanelId, PanelOutput, RequestToken};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited a text field on a panel.
    FieldEdited {
        panel: PanelId,
        field: Field,
        value: String,
    },
    /// User toggled the URL tester's render-JavaScript checkbox.
    RenderToggled(bool),
    /// User submitted a panel's form.
    Submitted(PanelId),
    /// Client completion for a dispatched request. The error side carries a
    /// human-readable message; the token decides whether it still applies.
    RequestCompleted {
        panel: PanelId,
        token: RequestToken,
        result: Result<PanelOutput, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
