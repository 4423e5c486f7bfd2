use crate::{ConsoleState, PanelId, PanelOutput, PanelState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsoleViewModel {
    pub panels: Vec<PanelView>,
}

/// Projection of one panel for the display layer. Pure data; building it
/// never mutates the state, so rendering twice yields identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub panel: PanelId,
    pub title: &'static str,
    pub busy: bool,
    pub submit_enabled: bool,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Empty,
    Loading,
    Error(String),
    Report(Vec<ReportSection>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

impl ConsoleState {
    pub fn view(&self) -> ConsoleViewModel {
        ConsoleViewModel {
            panels: PanelId::ALL
                .iter()
                .map(|&panel| self.panel_view(panel))
                .collect(),
        }
    }

    pub fn panel_view(&self, panel: PanelId) -> PanelView {
        let state = self.panel_state(panel);
        let busy = matches!(state, PanelState::Pending);
        let body = match state {
            PanelState::Idle => PanelBody::Empty,
            PanelState::Pending => PanelBody::Loading,
            PanelState::Success(output) => PanelBody::Report(report(output)),
            PanelState::Failure(message) => PanelBody::Error(message.clone()),
        };
        PanelView {
            panel,
            title: panel.title(),
            busy,
            submit_enabled: !busy,
            body,
        }
    }
}

fn report(output: &PanelOutput) -> Vec<ReportSection> {
    match output {
        PanelOutput::UrlTest {
            status,
            latency,
            charset,
        } => vec![ReportSection {
            heading: "Result",
            lines: vec![
                format!("Status: {status}"),
                format!("Latency: {latency:.2} seconds"),
                format!("Charset: {charset}"),
            ],
        }],
        PanelOutput::SelectorDiscover { hits } => vec![ReportSection {
            heading: "Discovered Selectors",
            lines: hits
                .iter()
                .map(|hit| format!("{}: {}", hit.selector, hit.data))
                .collect(),
        }],
        PanelOutput::SelectorExplain { explanation } => vec![ReportSection {
            heading: "Explanation",
            lines: text_lines(explanation),
        }],
        PanelOutput::SelectorRepair { suggestion } => vec![ReportSection {
            heading: "Suggestion",
            lines: text_lines(suggestion),
        }],
        PanelOutput::SpiderScaffold {
            spider_code,
            item_code,
        } => vec![
            ReportSection {
                heading: "Spider Code",
                lines: text_lines(spider_code),
            },
            ReportSection {
                heading: "Item Code",
                lines: text_lines(item_code),
            },
        ],
        PanelOutput::CrawlRun { stdout, stderr } => {
            // Mirror the console layout: a stream section only appears when
            // the crawl actually wrote to that stream.
            let mut sections = Vec::new();
            if !stdout.is_empty() {
                sections.push(ReportSection {
                    heading: "Stdout",
                    lines: text_lines(stdout),
                });
            }
            if !stderr.is_empty() {
                sections.push(ReportSection {
                    heading: "Stderr",
                    lines: text_lines(stderr),
                });
            }
            sections
        }
    }
}

fn text_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}
