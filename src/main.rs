use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod headless;

#[derive(Parser)]
#[command(name = "sift", about = "sift — search-as-you-type over JSON records")]
struct Cli {
    /// Write debug logs to /tmp/sift-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// JSON array or JSON Lines (.jsonl, .ndjson) file of records to search.
    /// Without it, a small built-in book catalogue is searched.
    #[arg(long, short)]
    records: Option<PathBuf>,

    /// Field paths to match against, comma separated (e.g. `title,authors`).
    #[arg(long, value_delimiter = ',')]
    fields: Option<Vec<String>>,

    /// Highlight style key: `bold`, `italics` or `format-inline-x-custom`.
    #[arg(long)]
    style: Option<String>,

    /// Highlight each matching character instead of the whole query.
    #[arg(long)]
    per_character: bool,

    /// Compatibility mode: raw query patterns, compounding per-character passes,
    /// and absent fields searched as "undefined".
    #[arg(long)]
    legacy: bool,

    /// Evaluate records on the rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Run one query without the TUI and print the results.
    #[arg(long, requires = "query")]
    headless: bool,

    /// Query for headless mode.
    #[arg(long, short)]
    query: Option<String>,

    /// Output format for headless mode.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// TUI colour theme (`default` or `gruvbox-dark`).
    #[arg(long, default_value = "default")]
    theme: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One highlighted display line per match.
    Text,
    /// One `{"record": …, "display": …}` object per match.
    Jsonl,
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration.
    fn apply(&self, config: &mut sift_core::config::Config) {
        if let Some(fields) = &self.fields {
            config.search.field_paths = fields.clone();
        }
        if let Some(style) = &self.style {
            config.highlight.style = style.clone();
        }
        config.highlight.per_character |= self.per_character;
        config.highlight.legacy |= self.legacy;
        config.search.parallel |= self.parallel;
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/sift-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("sift debug log started — tail -f /tmp/sift-debug.log");
    } else if cli.headless {
        // No terminal to protect; warnings go to stderr.
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }

    let mut config = sift_core::config::Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config: falling back to defaults");
        sift_core::config::Config::defaults()
    });
    cli.apply(&mut config);

    let records = match &cli.records {
        Some(path) => sift_core::records::load_path(path)?,
        None => sift_tui::demo_records(),
    };

    if cli.headless {
        let query = cli.query.as_deref().unwrap_or_default();
        let mut stdout = std::io::stdout().lock();
        return headless::run(query, &records, &config, cli.format, &mut stdout);
    }

    let theme = sift_tui::theme::Theme::by_name(&cli.theme);
    if let Some(chosen) = sift_tui::run(records, config, theme)? {
        println!("{}", serde_json::to_string(&chosen)?);
    }
    Ok(())
}
