use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use proposal_docx_config::Config;
use proposal_docx_engine::{Document, MarkdownConverter, io};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "proposal-docx")]
#[command(version)]
#[command(about = "Convert a markdown proposal into a formatted Word document", long_about = None)]
struct Args {
    /// Markdown file to convert (reads stdin if omitted or `-`)
    input: Option<PathBuf>,

    /// Output .docx path; relative paths go under `output_dir` from config.
    /// Defaults to the input name with a .docx extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title, shown above the content
    #[arg(short, long)]
    title: Option<String>,

    /// Config file to use instead of ~/.config/proposal-docx/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Leave out the configured page header
    #[arg(long)]
    no_header: bool,
}

impl Args {
    /// Input file path, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let markdown = match args.input_path() {
        Some(path) => io::read_markdown(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read markdown from stdin")?;
            buf
        }
    };

    let output = output_path(&args, &config)?;
    let doc = build_document(&markdown, args.title.as_deref(), !args.no_header, &config)?;

    io::save_document(&doc, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    info!("Wrote {} ({} blocks)", output.display(), doc.blocks().len());
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        };
    }
    let config = Config::load()?;
    if config.is_none() {
        info!(
            "No config file at {}, using defaults",
            Config::config_path().display()
        );
    }
    Ok(config.unwrap_or_default())
}

fn output_path(args: &Args, config: &Config) -> Result<PathBuf> {
    if let Some(output) = &args.output {
        return Ok(config.resolve_output(output));
    }
    match args.input_path() {
        Some(input) => Ok(io::default_output_path(input, config.output_dir.as_deref())),
        None => bail!("--output is required when reading from stdin"),
    }
}

/// Builds the full document: styles, header, title, then the converted body.
fn build_document(
    markdown: &str,
    title: Option<&str>,
    with_header: bool,
    config: &Config,
) -> Result<Document> {
    let mut doc = Document::new();

    for name in &config.disabled_styles {
        if doc.styles_mut().remove(name).is_none() {
            warn!("disabled_styles names unknown style '{name}'");
        }
    }

    if with_header && let Some(header) = config.page_header() {
        doc.set_header(header);
    }

    if let Some(title) = title {
        doc.add_heading(title, 0);
    }

    MarkdownConverter::new(config.convert_options())
        .convert(markdown, &mut doc)
        .context("Failed to convert markdown")?;
    Ok(doc)
}
