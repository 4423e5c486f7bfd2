use serde::de::DeserializeOwned;
use serde::Deserialize;

use scrapeboard_core::{PanelId, PanelOutput, SelectorHit};

use crate::{ApiError, ApiErrorKind};

// Per-endpoint response bodies. Unknown fields (the backend also returns
// page content on /url/test, for instance) are ignored.

#[derive(Debug, Deserialize)]
struct UrlTestBody {
    status: u16,
    latency: f64,
    charset: String,
}

#[derive(Debug, Deserialize)]
struct HitBody {
    selector: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct DiscoverBody {
    error: Option<String>,
    #[serde(default)]
    selectors: Vec<HitBody>,
}

#[derive(Debug, Deserialize)]
struct ExplainBody {
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct RepairBody {
    suggestion: String,
}

#[derive(Debug, Deserialize)]
struct ScaffoldBody {
    spider_code: String,
    item_code: String,
}

#[derive(Debug, Deserialize)]
struct CrawlBody {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
}

/// Decodes a 2xx body into the panel's typed output.
///
/// Selector discovery is the one endpoint where success is decided by the
/// payload rather than the HTTP status: a 2xx body carrying a top-level
/// `error` field is a failure, never a success with an error-shaped payload.
pub(crate) fn decode_panel(panel: PanelId, bytes: &[u8]) -> Result<PanelOutput, ApiError> {
    match panel {
        PanelId::UrlTest => {
            let body: UrlTestBody = parse(bytes)?;
            Ok(PanelOutput::UrlTest {
                status: body.status,
                latency: body.latency,
                charset: body.charset,
            })
        }
        PanelId::SelectorDiscover => {
            let body: DiscoverBody = parse(bytes)?;
            if let Some(error) = body.error {
                return Err(ApiError::new(ApiErrorKind::Backend, error));
            }
            Ok(PanelOutput::SelectorDiscover {
                hits: body
                    .selectors
                    .into_iter()
                    .map(|hit| SelectorHit {
                        selector: hit.selector,
                        data: hit.data,
                    })
                    .collect(),
            })
        }
        PanelId::SelectorExplain => {
            let body: ExplainBody = parse(bytes)?;
            Ok(PanelOutput::SelectorExplain {
                explanation: body.explanation,
            })
        }
        PanelId::SelectorRepair => {
            let body: RepairBody = parse(bytes)?;
            Ok(PanelOutput::SelectorRepair {
                suggestion: body.suggestion,
            })
        }
        PanelId::SpiderScaffold => {
            let body: ScaffoldBody = parse(bytes)?;
            Ok(PanelOutput::SpiderScaffold {
                spider_code: body.spider_code,
                item_code: body.item_code,
            })
        }
        PanelId::CrawlRun => {
            let body: CrawlBody = parse(bytes)?;
            Ok(PanelOutput::CrawlRun {
                stdout: body.stdout,
                stderr: body.stderr,
            })
        }
    }
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|err| ApiError::new(ApiErrorKind::Decode, err.to_string()))
}
