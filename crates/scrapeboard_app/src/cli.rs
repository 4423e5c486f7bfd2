//! Argument parsing for the one-shot driver:
//! `scrapeboard <panel> [key=value ...] [--base-url URL]`.

use anyhow::{bail, Result};
use scrapeboard_core::{Field, Msg, PanelId};

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub panel: PanelId,
    /// Field edits to apply before submitting the panel.
    pub msgs: Vec<Msg>,
    pub base_url: Option<String>,
}

pub const USAGE: &str = "usage: scrapeboard <panel> [key=value ...] [--base-url URL]\n\
  panels: url-test, selector-discover, selector-explain, selector-repair,\n\
          spider-scaffold, crawl-run\n\
  keys:   url, selector, name, spider, render (true|false)";

pub fn parse<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let panel = match args.next() {
        Some(name) => panel_by_name(&name)?,
        None => bail!("missing panel name\n{USAGE}"),
    };

    let mut msgs = Vec::new();
    let mut base_url = None;
    while let Some(arg) = args.next() {
        if arg == "--base-url" {
            match args.next() {
                Some(value) => base_url = Some(value),
                None => bail!("--base-url needs a value\n{USAGE}"),
            }
            continue;
        }
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected key=value, got {arg:?}\n{USAGE}");
        };
        msgs.push(edit_msg(panel, key, value)?);
    }

    Ok(Invocation {
        panel,
        msgs,
        base_url,
    })
}

fn panel_by_name(name: &str) -> Result<PanelId> {
    Ok(match name {
        "url-test" => PanelId::UrlTest,
        "selector-discover" => PanelId::SelectorDiscover,
        "selector-explain" => PanelId::SelectorExplain,
        "selector-repair" => PanelId::SelectorRepair,
        "spider-scaffold" => PanelId::SpiderScaffold,
        "crawl-run" => PanelId::CrawlRun,
        other => bail!("unknown panel {other:?}\n{USAGE}"),
    })
}

fn edit_msg(panel: PanelId, key: &str, value: &str) -> Result<Msg> {
    let field = match key {
        "url" => Field::Url,
        "selector" => Field::Selector,
        "name" => Field::Name,
        "spider" => Field::Spider,
        "render" => {
            let render = match value {
                "true" => true,
                "false" => false,
                other => bail!("render must be true or false, got {other:?}"),
            };
            return Ok(Msg::RenderToggled(render));
        }
        other => bail!("unknown key {other:?}\n{USAGE}"),
    };
    Ok(Msg::FieldEdited {
        panel,
        field,
        value: value.to_string(),
    })
}
