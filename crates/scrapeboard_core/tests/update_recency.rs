use std::sync::Once;

use scrapeboard_core::{
    update, ConsoleState, Effect, Msg, PanelId, PanelOutput, PanelState, RequestToken,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(console_logging::initialize_for_tests);
}

fn submit(state: ConsoleState, panel: PanelId) -> (ConsoleState, RequestToken) {
    let (state, effects) = update(state, Msg::Submitted(panel));
    match effects.as_slice() {
        [Effect::Dispatch { token, .. }] => (state, *token),
        other => panic!("expected a single Dispatch effect, got {other:?}"),
    }
}

fn explain_ok(text: &str) -> Result<PanelOutput, String> {
    Ok(PanelOutput::SelectorExplain {
        explanation: text.to_string(),
    })
}

#[test]
fn tokens_increase_monotonically_per_panel() {
    init_logging();
    let state = ConsoleState::new();
    let (state, first) = submit(state, PanelId::SelectorExplain);
    let (state, second) = submit(state, PanelId::SelectorExplain);
    // An unrelated panel allocates from its own counter.
    let (_state, other) = submit(state, PanelId::CrawlRun);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(other, 1);
}

#[test]
fn late_completion_of_superseded_request_is_discarded() {
    init_logging();
    let state = ConsoleState::new();
    let (state, r1) = submit(state, PanelId::SelectorExplain);
    let (state, r2) = submit(state, PanelId::SelectorExplain);

    // R2 resolves first and wins.
    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::SelectorExplain,
            token: r2,
            result: explain_ok("second"),
        },
    );
    // R1 straggles in afterwards and must not overwrite the fresher result.
    let (mut state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::SelectorExplain,
            token: r1,
            result: explain_ok("first"),
        },
    );

    match state.panel_state(PanelId::SelectorExplain) {
        PanelState::Success(PanelOutput::SelectorExplain { explanation }) => {
            assert_eq!(explanation, "second");
        }
        other => panic!("expected success, got {other:?}"),
    }
    // The discarded straggler does not schedule a re-render either.
    assert!(!state.consume_dirty());
}

#[test]
fn superseded_failure_cannot_overwrite_fresh_success() {
    init_logging();
    let state = ConsoleState::new();
    let (state, r1) = submit(state, PanelId::SelectorDiscover);
    let (state, r2) = submit(state, PanelId::SelectorDiscover);

    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::SelectorDiscover,
            token: r2,
            result: Ok(PanelOutput::SelectorDiscover { hits: Vec::new() }),
        },
    );
    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::SelectorDiscover,
            token: r1,
            result: Err("timed out".to_string()),
        },
    );

    assert!(matches!(
        state.panel_state(PanelId::SelectorDiscover),
        PanelState::Success(_)
    ));
}

#[test]
fn while_both_outstanding_only_the_latest_token_applies() {
    init_logging();
    let state = ConsoleState::new();
    let (state, r1) = submit(state, PanelId::UrlTest);
    let (state, r2) = submit(state, PanelId::UrlTest);

    // R1 resolves while R2 is still in flight: the panel stays Pending.
    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::UrlTest,
            token: r1,
            result: Err("connection reset".to_string()),
        },
    );
    assert_eq!(state.panel_state(PanelId::UrlTest), &PanelState::Pending);

    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::UrlTest,
            token: r2,
            result: Ok(PanelOutput::UrlTest {
                status: 200,
                latency: 0.12,
                charset: "utf-8".to_string(),
            }),
        },
    );
    assert!(matches!(
        state.panel_state(PanelId::UrlTest),
        PanelState::Success(_)
    ));
}

#[test]
fn duplicate_completion_for_a_settled_request_is_ignored() {
    init_logging();
    let state = ConsoleState::new();
    let (state, token) = submit(state, PanelId::SelectorExplain);
    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::SelectorExplain,
            token,
            result: explain_ok("once"),
        },
    );
    let (mut state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::SelectorExplain,
            token,
            result: Err("again".to_string()),
        },
    );

    match state.panel_state(PanelId::SelectorExplain) {
        PanelState::Success(PanelOutput::SelectorExplain { explanation }) => {
            assert_eq!(explanation, "once");
        }
        other => panic!("expected success, got {other:?}"),
    }
    assert!(!state.consume_dirty());
}

#[test]
fn panels_are_independent() {
    init_logging();
    let state = ConsoleState::new();
    let (state, crawl_token) = submit(state, PanelId::CrawlRun);
    let (state, url_token) = submit(state, PanelId::UrlTest);

    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::CrawlRun,
            token: crawl_token,
            result: Err("spider not found".to_string()),
        },
    );

    // The crawl failure is scoped to its own panel.
    assert_eq!(state.panel_state(PanelId::UrlTest), &PanelState::Pending);
    assert_eq!(
        state.panel_state(PanelId::CrawlRun),
        &PanelState::Failure("spider not found".to_string())
    );

    let (state, _) = update(
        state,
        Msg::RequestCompleted {
            panel: PanelId::UrlTest,
            token: url_token,
            result: Ok(PanelOutput::UrlTest {
                status: 200,
                latency: 0.05,
                charset: "utf-8".to_string(),
            }),
        },
    );
    assert!(matches!(
        state.panel_state(PanelId::UrlTest),
        PanelState::Success(_)
    ));
}
