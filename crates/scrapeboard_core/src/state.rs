use crate::{Field, PanelForms, PanelId, PanelOutput};

/// Per-panel recency token. Tokens increase monotonically per panel; a
/// completion is applied only when its token matches the panel's most
/// recently issued one, so out-of-order completions for superseded requests
/// are discarded without needing cancellation.
pub type RequestToken = u64;

/// Lifecycle of one panel's request. Success and Failure are terminal until
/// the next submission, which moves the panel straight back to Pending.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    Pending,
    Success(PanelOutput),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
struct PanelSlot {
    state: PanelState,
    last_issued: RequestToken,
}

/// Whole-console state: one slot per panel plus the current form values.
/// Panels are fully independent; nothing here is shared across them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsoleState {
    forms: PanelForms,
    slots: [PanelSlot; PanelId::ALL.len()],
    dirty: bool,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forms(&self) -> &PanelForms {
        &self.forms
    }

    pub fn panel_state(&self, panel: PanelId) -> &PanelState {
        &self.slots[panel.index()].state
    }

    /// Most recently issued token for the panel, or 0 if it never submitted.
    pub fn last_issued(&self, panel: PanelId) -> RequestToken {
        self.slots[panel.index()].last_issued
    }

    /// Returns whether a re-render is due, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn edit_field(&mut self, panel: PanelId, field: Field, value: String) {
        if self.forms.apply_edit(panel, field, value) {
            self.dirty = true;
        }
    }

    pub(crate) fn set_render(&mut self, render: bool) {
        self.forms.url_test.render = render;
        self.dirty = true;
    }

    /// Issues a fresh token and enters Pending, dropping any prior payload
    /// or error message so a stale result can never flash alongside the new
    /// request. Any request still outstanding is superseded by the new token.
    pub(crate) fn begin_request(&mut self, panel: PanelId) -> RequestToken {
        let slot = &mut self.slots[panel.index()];
        slot.last_issued += 1;
        slot.state = PanelState::Pending;
        self.dirty = true;
        slot.last_issued
    }

    /// Applies a completion if it belongs to the panel's current in-flight
    /// request. Returns false when the completion was stale and discarded.
    pub(crate) fn apply_completion(
        &mut self,
        panel: PanelId,
        token: RequestToken,
        result: Result<PanelOutput, String>,
    ) -> bool {
        let slot = &mut self.slots[panel.index()];
        if token != slot.last_issued || slot.state != PanelState::Pending {
            return false;
        }
        slot.state = match result {
            Ok(output) => PanelState::Success(output),
            Err(message) => PanelState::Failure(message),
        };
        self.dirty = true;
        true
    }
}
