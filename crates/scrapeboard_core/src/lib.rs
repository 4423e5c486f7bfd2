//! Scrapeboard core: pure panel state machine and view-model helpers.
mod effect;
mod msg;
mod output;
mod panel;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use output::{PanelOutput, SelectorHit};
pub use panel::{
    CrawlForm, DiscoverForm, ExplainForm, Field, PanelForms, PanelId, RepairForm, ScaffoldForm,
    UrlTestForm,
};
pub use request::{request_spec, HttpMethod, RequestSpec};
pub use state::{ConsoleState, PanelState, RequestToken};
pub use update::update;
pub use view_model::{ConsoleViewModel, PanelBody, PanelView, ReportSection};
