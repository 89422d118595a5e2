//! Clipboard export — "Salin & Buka Dokumen".
//!
//! Copies the rendered document to the system clipboard, then opens a blank
//! document in the configured editor so the teacher only has to paste.
//! The browser page performs the same action client-side; this module backs
//! the CLI's `--copy`.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::render::DocumentView;

pub const DEFAULT_EDITOR_URL: &str = "https://docs.new";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available (tried: {})", tried.join(", "))]
    Unavailable { tried: Vec<String> },

    #[error("clipboard tool '{tool}' failed: {message}")]
    Tool { tool: String, message: String },

    #[error("clipboard I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ClipboardError {
    pub fn user_message(&self) -> &'static str {
        "Gagal menyalin otomatis. Silakan blok tabel dan salin manual."
    }
}

/// Both clipboard flavours of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub html: String,
    pub text: String,
}

impl ClipboardPayload {
    pub fn from_view(view: &DocumentView) -> Result<Self, askama::Error> {
        Ok(Self {
            html: view.to_html()?,
            text: view.to_plain_text(),
        })
    }
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn copy(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError>;
}

/// Opens a URL in the user's browser without waiting for it.
pub trait EditorLauncher: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub copied_bytes: usize,
    pub editor_opened: bool,
    /// Transient confirmation shown to the user.
    pub message: String,
}

/// Copies `payload`, then opens `editor_url`. A launcher failure is logged
/// and reflected in the receipt; only a copy failure is an error.
pub async fn export_to_clipboard(
    payload: &ClipboardPayload,
    clipboard: &dyn Clipboard,
    launcher: &dyn EditorLauncher,
    editor_url: &str,
) -> Result<ExportReceipt, ClipboardError> {
    clipboard.copy(payload).await?;
    let copied_bytes = payload.html.len();
    info!("Document copied to clipboard ({copied_bytes} bytes of HTML)");

    let editor_opened = match launcher.open(editor_url) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to open editor at {editor_url}: {e}");
            false
        }
    };

    let message = if editor_opened {
        "Berhasil Disalin! Konten telah disalin ke clipboard dan dokumen baru sedang dibuka. \
         Tekan Ctrl + V untuk menempel."
            .to_string()
    } else {
        format!(
            "Berhasil Disalin! Konten telah disalin ke clipboard. \
             Buka {editor_url} lalu tekan Ctrl + V untuk menempel."
        )
    };

    Ok(ExportReceipt {
        copied_bytes,
        editor_opened,
        message,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// System implementations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavour {
    Html,
    Text,
}

/// One external clipboard program and the flavour it receives on stdin.
#[derive(Debug, Clone)]
pub struct ClipboardTool {
    pub program: String,
    pub args: Vec<String>,
    pub flavour: Flavour,
}

impl ClipboardTool {
    pub fn new(program: &str, args: &[&str], flavour: Flavour) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            flavour,
        }
    }
}

/// Pipes the payload into the first clipboard tool that exists and succeeds.
pub struct SystemClipboard {
    tools: Vec<ClipboardTool>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_tools(vec![
            ClipboardTool::new("pbcopy", &[], Flavour::Text),
            ClipboardTool::new("wl-copy", &["--type", "text/html"], Flavour::Html),
            ClipboardTool::new(
                "xclip",
                &["-selection", "clipboard", "-t", "text/html"],
                Flavour::Html,
            ),
            ClipboardTool::new("xsel", &["--clipboard", "--input"], Flavour::Text),
            ClipboardTool::new("clip", &[], Flavour::Text),
        ])
    }

    pub fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }

    async fn run(tool: &ClipboardTool, input: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&tool.program)
            .args(&tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Tool {
                tool: tool.program.clone(),
                message: format!("exited with {status}"),
            })
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn copy(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        let mut tried = Vec::new();
        let mut last_failure = None;

        for tool in &self.tools {
            tried.push(tool.program.clone());
            let input = match tool.flavour {
                Flavour::Html => &payload.html,
                Flavour::Text => &payload.text,
            };
            match Self::run(tool, input).await {
                Ok(()) => {
                    debug!("Copied with {}", tool.program);
                    return Ok(());
                }
                Err(ClipboardError::Io(e)) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    debug!("Clipboard tool {} failed: {e}", tool.program);
                    last_failure = Some(e);
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::Unavailable { tried }))
    }
}

/// Opens URLs with the platform's default handler.
pub struct SystemEditorLauncher;

impl EditorLauncher for SystemEditorLauncher {
    fn open(&self, url: &str) -> io::Result<()> {
        let mut command = if cfg!(target_os = "macos") {
            let mut c = std::process::Command::new("open");
            c.arg(url);
            c
        } else if cfg!(target_os = "windows") {
            let mut c = std::process::Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        } else {
            let mut c = std::process::Command::new("xdg-open");
            c.arg(url);
            c
        };
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
