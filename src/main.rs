//! markdown-mirror - convert an HTML page to agent-friendly Markdown

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kodegen_tools_markdown_mirror::{ConfigFile, ContentSignal, HtmlToMarkdown};

#[derive(Parser)]
#[command(name = "markdown-mirror")]
#[command(version, about = "Convert HTML to agent-friendly Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    markdown-mirror page.html                         Convert a saved page
    curl -s https://example.com | markdown-mirror \\
        --base-url https://example.com                Convert from stdin
    markdown-mirror page.html --json                  Print the full result as JSON")]
struct Cli {
    /// HTML file to convert (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Base URL for resolving relative links and images
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Content root selector, highest priority first (replaces the defaults)
    #[arg(long = "content-selector", value_name = "SELECTOR")]
    content_selectors: Vec<String>,

    /// Extra selector to remove from the content
    #[arg(long = "exclude", value_name = "SELECTOR")]
    exclude_selectors: Vec<String>,

    /// Selector to keep even when an exclusion matches it
    #[arg(long = "include", value_name = "SELECTOR")]
    include_selectors: Vec<String>,

    /// Skip JSON-LD extraction and frontmatter
    #[arg(long)]
    no_json_ld: bool,

    /// Maximum accepted input size in bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<usize>,

    /// Content signal to record in the JSON output (ai-train, search, ai-input)
    #[arg(long, value_name = "SIGNAL")]
    content_signal: Option<ContentSignal>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the full conversion result as JSON instead of Markdown
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut file_config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            ConfigFile::from_json(&json)?
        }
        None => ConfigFile::default(),
    };

    if !cli.content_selectors.is_empty() {
        file_config.content_selectors = Some(cli.content_selectors);
    }
    file_config.exclude_selectors.extend(cli.exclude_selectors);
    file_config.include_selectors.extend(cli.include_selectors);
    if cli.no_json_ld {
        file_config.extract_json_ld = Some(false);
    }
    if cli.base_url.is_some() {
        file_config.base_url = cli.base_url;
    }
    if cli.max_size.is_some() {
        file_config.max_content_size = cli.max_size;
    }
    if cli.content_signal.is_some() {
        file_config.content_signal = cli.content_signal;
    }

    let config = file_config.into_builder().build()?;
    let signal = config.content_signal();

    let html = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read HTML from stdin")?;
            html
        }
    };

    let converter = Arc::new(HtmlToMarkdown::new(config));
    let result = converter.convert_async(html).await?;

    tracing::info!(
        token_count = result.token_count,
        content_signal = signal.map(|s| s.as_str()),
        "Conversion complete"
    );

    if cli.json {
        let mut value = serde_json::to_value(&result)?;
        if let (Some(signal), Some(object)) = (signal, value.as_object_mut()) {
            object.insert(
                "contentSignal".to_string(),
                serde_json::Value::String(signal.as_str().to_string()),
            );
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", result.markdown);
    }

    Ok(())
}
