use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use askama::Template;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::export::{export_to_clipboard, Clipboard, ClipboardPayload, EditorLauncher};
use crate::generation::generator::{parse_content, ContentGenerator};
use crate::lesson::validation::validate_request;
use crate::lesson::{LessonPlanContent, LessonPlanRequest};
use crate::render::{render, DocumentView};

#[derive(Parser)]
#[command(name = "rpm", version, about = "Rencana Pembelajaran Mendalam generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default when no command is given)
    Serve {
        /// Port to listen on; overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate one RPM document from a JSON request file
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// JSON file holding a lesson-plan request (camelCase fields)
    #[arg(long)]
    pub request: PathBuf,

    /// Render this previously generated content instead of calling the service
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Write the HTML document here; plain text goes to stdout otherwise
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Copy the document to the clipboard and open the document editor
    #[arg(long)]
    pub copy: bool,
}

/// Full HTML page around the document fragment, for `--output`.
#[derive(Template)]
#[template(path = "standalone.html")]
struct StandalonePage<'a> {
    subject: &'a str,
    grade_class: &'a str,
    document: &'a str,
}

/// Runs `rpm generate`. Returns the rendered document.
pub async fn run_generate(
    args: &GenerateArgs,
    config: &Config,
    generator: &dyn ContentGenerator,
    clipboard: &dyn Clipboard,
    launcher: &dyn EditorLauncher,
    stdout: &mut dyn Write,
) -> Result<DocumentView> {
    let request = read_request(args).await?;

    let validation = validate_request(&request);
    if !validation.passed {
        bail!(validation.summary());
    }

    let content = match &args.content {
        Some(path) => read_content(path).await?,
        None => generator
            .generate(&request)
            .await
            .map_err(|e| anyhow!("{} ({e})", e.user_message()))?,
    };

    let view = render(&request, &content, &config.document_settings());

    match &args.output {
        Some(path) => {
            let page = StandalonePage {
                subject: &request.subject,
                grade_class: &request.grade_class,
                document: &view.to_html()?,
            }
            .render()?;
            tokio::fs::write(path, page)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Document written to {}", path.display());
        }
        None => stdout
            .write_all(view.to_plain_text().as_bytes())
            .context("Failed to write document to stdout")?,
    }

    if args.copy {
        let payload = ClipboardPayload::from_view(&view)?;
        let receipt = export_to_clipboard(&payload, clipboard, launcher, &config.editor_url)
            .await
            .map_err(|e| anyhow!("{} ({e})", e.user_message()))?;
        eprintln!("{}", receipt.message);
    }

    Ok(view)
}

async fn read_request(args: &GenerateArgs) -> Result<LessonPlanRequest> {
    let raw = tokio::fs::read_to_string(&args.request)
        .await
        .with_context(|| format!("Failed to read {}", args.request.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid lesson-plan request", args.request.display()))
}

async fn read_content(path: &Path) -> Result<LessonPlanContent> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_content(&raw).with_context(|| format!("{} is not valid RPM content", path.display()))
}
