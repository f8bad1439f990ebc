use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    ClientSettings, DirectoryDownloadSink, FilePreviewSurface, GenerationBackend,
    GenerationClient, SessionController, QUICK_PROMPTS,
};
use shared::domain::{ComponentType, Origin, Severity};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flexiui", about = "Generate UI components from a prompt")]
struct Args {
    /// Settings file (defaults to ./flexiui.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Overrides the generation endpoint base URL
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a component and export it as a standalone HTML file
    Generate {
        /// Prompt text
        #[arg(short, long, conflicts_with = "quick")]
        prompt: Option<String>,
        /// Index of a canned prompt (see `quick-prompts`)
        #[arg(short, long)]
        quick: Option<usize>,
        #[arg(long)]
        component_type: Option<String>,
        /// Directory the exported file is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Where the preview document is written
        #[arg(long)]
        preview: Option<PathBuf>,
        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the generation endpoint is up
    Health,
    /// List canned prompts
    QuickPrompts,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => ClientSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => ClientSettings::load().context("failed to load settings")?,
    };
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
        settings.validate().context("invalid --api-url")?;
    }

    match args.command {
        Command::Generate {
            prompt,
            quick,
            component_type,
            out_dir,
            preview,
            json,
        } => {
            if let Some(raw) = component_type {
                settings.component_type = ComponentType::parse(&raw)
                    .ok_or_else(|| anyhow!("unknown component type '{raw}'"))?;
            }
            generate(&settings, prompt, quick, out_dir, preview, json).await
        }
        Command::Health => health(&settings).await,
        Command::QuickPrompts => {
            for (index, quick) in QUICK_PROMPTS.iter().enumerate() {
                println!("{index}: {:<14} {}", quick.label, quick.prompt);
            }
            Ok(())
        }
    }
}

async fn generate(
    settings: &ClientSettings,
    prompt: Option<String>,
    quick: Option<usize>,
    out_dir: PathBuf,
    preview_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let client = GenerationClient::new(settings)?;
    let mut session = SessionController::new(settings);
    let mut preview = FilePreviewSurface::new(
        preview_path.unwrap_or_else(|| std::env::temp_dir().join("flexiui").join("preview.html")),
    );

    match (prompt, quick) {
        (Some(prompt), _) => session.submit(&prompt, &client, &mut preview).await,
        (None, Some(index)) => {
            session
                .submit_quick_prompt(index, &client, &mut preview)
                .await
        }
        (None, None) => bail!("pass --prompt or --quick"),
    }

    let generated = !session.state().artifact().is_empty();
    if generated {
        let mut downloads = DirectoryDownloadSink::new(&out_dir);
        if session.export_document(&mut downloads) {
            println!(
                "Exported {}",
                downloads.path_for(&settings.export_filename).display()
            );
        }
        println!("Preview written to {}", preview.path().display());
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(session.state().transcript())?
        );
    } else {
        for entry in session.state().transcript() {
            let who = match entry.origin {
                Origin::User => "you",
                Origin::System => "flexiui",
            };
            println!("[{}] {who}: {}", entry.at.format("%H:%M:%S"), entry.text);
        }
    }

    let failure = session
        .notifications_mut()
        .drain()
        .into_iter()
        .filter(|n| n.severity == Severity::Danger || n.severity == Severity::Warning)
        .map(|n| n.message)
        .last();
    match (generated, failure) {
        (true, _) => Ok(()),
        (false, Some(message)) => Err(anyhow!(message)),
        (false, None) => Err(anyhow!("generation returned no code")),
    }
}

async fn health(settings: &ClientSettings) -> Result<()> {
    let client = GenerationClient::new(settings)?;
    let report = client
        .health()
        .await
        .with_context(|| format!("generation endpoint unreachable at {}", settings.api_url))?;
    println!(
        "status: {} (model key configured: {})",
        report.status, report.groq_api_configured
    );
    if report.is_healthy() {
        Ok(())
    } else {
        Err(anyhow!("endpoint reported status '{}'", report.status))
    }
}
