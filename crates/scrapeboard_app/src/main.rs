mod cli;
mod effects;
mod logging;

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use scrapeboard_client::{ClientHandle, ClientSettings, DEFAULT_BASE_URL};
use scrapeboard_core::{update, ConsoleState, Msg, PanelBody, PanelState, PanelView};

use effects::EffectRunner;

const RESPONSE_DEADLINE: Duration = Duration::from_secs(120);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

fn main() -> Result<()> {
    logging::initialize();
    let invocation = cli::parse(std::env::args().skip(1))?;
    run(invocation)
}

fn run(invocation: cli::Invocation) -> Result<()> {
    let base_url = invocation
        .base_url
        .clone()
        .or_else(|| std::env::var("SCRAPEBOARD_API").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let settings = ClientSettings {
        base_url: base_url.clone(),
        ..ClientSettings::default()
    };
    let handle = ClientHandle::new(&settings).context("failed to set up the request client")?;
    let runner = EffectRunner::new(handle);

    let mut state = ConsoleState::new();
    for msg in invocation.msgs {
        let (next, _effects) = update(state, msg);
        state = next;
    }
    let (next, effects) = update(state, Msg::Submitted(invocation.panel));
    state = next;
    runner.enqueue(effects);

    let deadline = Instant::now() + RESPONSE_DEADLINE;
    while matches!(state.panel_state(invocation.panel), PanelState::Pending) {
        if Instant::now() >= deadline {
            bail!("no response from {base_url} within {RESPONSE_DEADLINE:?}");
        }
        match runner.try_recv() {
            Some(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    }

    print_panel(&state.panel_view(invocation.panel));

    if let PanelState::Failure(message) = state.panel_state(invocation.panel) {
        bail!("{} failed: {message}", invocation.panel);
    }
    Ok(())
}

fn print_panel(view: &PanelView) {
    println!("== {} ==", view.title);
    match &view.body {
        PanelBody::Empty => println!("(no result)"),
        PanelBody::Loading => println!("(pending)"),
        PanelBody::Error(message) => {
            println!("Error");
            println!("  {message}");
        }
        PanelBody::Report(sections) => {
            for section in sections {
                println!("{}", section.heading);
                for line in &section.lines {
                    println!("  {line}");
                }
            }
        }
    }
}
