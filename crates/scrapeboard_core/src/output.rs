/// One discovered selector together with the sample data it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorHit {
    pub selector: String,
    pub data: String,
}

/// Decoded success payload for one panel's request. The shape is fixed per
/// panel; the client crate is responsible for producing the variant that
/// matches the panel it decoded for.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelOutput {
    UrlTest {
        status: u16,
        latency: f64,
        charset: String,
    },
    SelectorDiscover {
        hits: Vec<SelectorHit>,
    },
    SelectorExplain {
        explanation: String,
    },
    SelectorRepair {
        suggestion: String,
    },
    SpiderScaffold {
        spider_code: String,
        item_code: String,
    },
    CrawlRun {
        stdout: String,
        stderr: String,
    },
}
