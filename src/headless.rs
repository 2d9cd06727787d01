//! Headless mode: run a single query and write the results to a stream.

use crate::OutputFormat;
use serde_json::{json, Value};
use sift_core::{config::Config, SearchPipeline};
use std::io::Write;

pub fn run(
    query: &str,
    records: &[Value],
    config: &Config,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let pipeline = SearchPipeline::from_config(config);
    let results = pipeline.run(query, records);
    tracing::debug!(query, matched = results.len(), total = records.len(), "headless: done");

    for result in &results {
        match format {
            OutputFormat::Text => writeln!(out, "{}", result.display_text)?,
            OutputFormat::Jsonl => {
                let line = json!({ "record": result.record, "display": result.display_text });
                writeln!(out, "{}", serde_json::to_string(&line)?)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bold_config() -> Config {
        let mut config = Config::defaults();
        config.highlight.style = "bold".to_string();
        config
    }

    fn render(query: &str, format: OutputFormat) -> String {
        let mut out = Vec::new();
        run(query, &sift_tui::demo_records(), &bold_config(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lines() {
        assert_eq!(
            render("effective", OutputFormat::Text),
            "The <b>Effective</b> Engineer - Edmond Lau\n<b>Effective</b> Python - Diomiddis Spinellis\n"
        );
    }

    #[test]
    fn jsonl_objects() {
        let out = render("lean", OutputFormat::Jsonl);
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["record"]["title"], "The Lean Startup");
        assert_eq!(lines[0]["display"], "The <b>Lean</b> Startup - Eric Reiss");
    }
}
