use crate::{PanelForms, PanelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Fully-formed description of one outbound call, built from the current
/// form values at submission time. Immutable once built; query values are
/// passed verbatim and percent-encoded by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
}

/// The per-panel endpoint descriptor: maps a panel's form onto its request.
/// This is the single place the backend routes are spelled out.
pub fn request_spec(panel: PanelId, forms: &PanelForms) -> RequestSpec {
    match panel {
        PanelId::UrlTest => RequestSpec {
            method: HttpMethod::Get,
            path: "/url/test",
            query: vec![
                ("url", forms.url_test.url.clone()),
                ("render", forms.url_test.render.to_string()),
            ],
        },
        PanelId::SelectorDiscover => RequestSpec {
            method: HttpMethod::Get,
            path: "/selector/discover",
            query: vec![("url", forms.discover.url.clone())],
        },
        PanelId::SelectorExplain => RequestSpec {
            method: HttpMethod::Get,
            path: "/selector/explain",
            query: vec![("selector", forms.explain.selector.clone())],
        },
        PanelId::SelectorRepair => RequestSpec {
            method: HttpMethod::Get,
            path: "/selector/repair",
            query: vec![
                ("url", forms.repair.url.clone()),
                ("selector", forms.repair.selector.clone()),
            ],
        },
        PanelId::SpiderScaffold => RequestSpec {
            method: HttpMethod::Get,
            path: "/spider/scaffold",
            query: vec![
                ("name", forms.scaffold.name.clone()),
                ("url", forms.scaffold.url.clone()),
                ("selector", forms.scaffold.selector.clone()),
            ],
        },
        // The backend takes the spider name as a query parameter even on
        // POST; the request carries no body.
        PanelId::CrawlRun => RequestSpec {
            method: HttpMethod::Post,
            path: "/crawl/run",
            query: vec![("spider", forms.crawl.spider.clone())],
        },
    }
}
