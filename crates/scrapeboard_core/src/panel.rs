use std::fmt;

/// Identity of one console panel. The set is fixed for the lifetime of a
/// session; panels are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelId {
    UrlTest,
    SelectorDiscover,
    SelectorExplain,
    SelectorRepair,
    SpiderScaffold,
    CrawlRun,
}

impl PanelId {
    /// All panels, in tab order.
    pub const ALL: [PanelId; 6] = [
        PanelId::UrlTest,
        PanelId::SelectorDiscover,
        PanelId::SelectorExplain,
        PanelId::SelectorRepair,
        PanelId::SpiderScaffold,
        PanelId::CrawlRun,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PanelId::UrlTest => "URL Tester",
            PanelId::SelectorDiscover => "Selector Discoverer",
            PanelId::SelectorExplain => "Selector Explainer",
            PanelId::SelectorRepair => "Selector Repairer",
            PanelId::SpiderScaffold => "Spider Scaffolder",
            PanelId::CrawlRun => "Crawl Runner",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A text input field on some panel. Not every panel has every field; an
/// edit naming a field the panel lacks is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    Selector,
    Name,
    Spider,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlTestForm {
    pub url: String,
    pub render: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoverForm {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplainForm {
    pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepairForm {
    pub url: String,
    pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScaffoldForm {
    pub name: String,
    pub url: String,
    pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrawlForm {
    pub spider: String,
}

/// Current input values for every panel. Inputs are plain strings (plus the
/// one render checkbox); empty values are submittable, the backend is the
/// validator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelForms {
    pub url_test: UrlTestForm,
    pub discover: DiscoverForm,
    pub explain: ExplainForm,
    pub repair: RepairForm,
    pub scaffold: ScaffoldForm,
    pub crawl: CrawlForm,
}

impl PanelForms {
    /// Applies a text edit to the named field of the given panel.
    /// Returns false when the panel has no such field.
    pub(crate) fn apply_edit(&mut self, panel: PanelId, field: Field, value: String) -> bool {
        let slot = match (panel, field) {
            (PanelId::UrlTest, Field::Url) => &mut self.url_test.url,
            (PanelId::SelectorDiscover, Field::Url) => &mut self.discover.url,
            (PanelId::SelectorExplain, Field::Selector) => &mut self.explain.selector,
            (PanelId::SelectorRepair, Field::Url) => &mut self.repair.url,
            (PanelId::SelectorRepair, Field::Selector) => &mut self.repair.selector,
            (PanelId::SpiderScaffold, Field::Name) => &mut self.scaffold.name,
            (PanelId::SpiderScaffold, Field::Url) => &mut self.scaffold.url,
            (PanelId::SpiderScaffold, Field::Selector) => &mut self.scaffold.selector,
            (PanelId::CrawlRun, Field::Spider) => &mut self.crawl.spider,
            _ => return false,
        };
        *slot = value;
        true
    }
}
