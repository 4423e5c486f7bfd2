use std::sync::Arc;
use std::time::{Duration, Instant};

use scrapeboard_core::{request_spec, PanelForms, PanelId, PanelOutput, RequestSpec};
use scrapeboard_client::{
    ApiError, ApiErrorKind, ClientEvent, ClientHandle, ClientSettings, Transport,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_event(handle: &ClientHandle) -> ClientEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no completion within deadline");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn dispatch_delivers_completion_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/selector/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "Selects all h1 elements.",
        })))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    let handle = ClientHandle::new(&settings).expect("client handle");

    let mut forms = PanelForms::default();
    forms.explain.selector = "h1".to_string();
    handle.dispatch(
        PanelId::SelectorExplain,
        1,
        request_spec(PanelId::SelectorExplain, &forms),
    );

    let ClientEvent::Completed {
        panel,
        token,
        result,
    } = wait_for_event(&handle).await;
    assert_eq!(panel, PanelId::SelectorExplain);
    assert_eq!(token, 1);
    assert_eq!(
        result.expect("success"),
        PanelOutput::SelectorExplain {
            explanation: "Selects all h1 elements.".to_string(),
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failures_are_delivered_not_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crawl/run"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    let handle = ClientHandle::new(&settings).expect("client handle");

    handle.dispatch(
        PanelId::CrawlRun,
        3,
        request_spec(PanelId::CrawlRun, &PanelForms::default()),
    );

    let ClientEvent::Completed { token, result, .. } = wait_for_event(&handle).await;
    assert_eq!(token, 3);
    let err = result.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::HttpStatus(500));
}

/// Scripted transport that completes each request after a per-path delay,
/// for exercising out-of-order completions.
struct DelayedTransport;

#[async_trait::async_trait]
impl Transport for DelayedTransport {
    async fn execute(&self, _panel: PanelId, spec: &RequestSpec) -> Result<PanelOutput, ApiError> {
        let (delay_ms, text) = match spec.query.first() {
            Some((_, value)) if value == "slow" => (150, "slow"),
            _ => (10, "fast"),
        };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(PanelOutput::SelectorExplain {
            explanation: text.to_string(),
        })
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn bridge_delivers_every_completion_and_echoes_tokens() {
    // The bridge itself does not filter superseded requests; it reports both
    // completions with their tokens and leaves the recency decision to the
    // state machine.
    let handle = ClientHandle::with_transport(Arc::new(DelayedTransport));

    let mut forms = PanelForms::default();
    forms.explain.selector = "slow".to_string();
    handle.dispatch(
        PanelId::SelectorExplain,
        1,
        request_spec(PanelId::SelectorExplain, &forms),
    );
    forms.explain.selector = "fast".to_string();
    handle.dispatch(
        PanelId::SelectorExplain,
        2,
        request_spec(PanelId::SelectorExplain, &forms),
    );

    let first = wait_for_event(&handle).await;
    let second = wait_for_event(&handle).await;

    let tokens: Vec<_> = [&first, &second]
        .iter()
        .map(|event| {
            let ClientEvent::Completed { token, .. } = event;
            *token
        })
        .collect();
    // The fast request (token 2) finishes before the superseded slow one.
    assert_eq!(tokens, vec![2, 1]);
}
