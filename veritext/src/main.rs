mod config;
mod error;
mod extract;
mod ocr;
mod pipeline;
mod validate;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::ocr::OcrProvider;
use crate::validate::ValidationClient;

#[derive(Parser)]
#[command(name = "veritext")]
#[command(about = "OCR images and PDFs under a path and validate the extracted text")]
struct Args {
    /// File or folder to process
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veritext=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(input_path) = args.path else {
        eprintln!("Usage: veritext <file_or_folder_path>");
        std::process::exit(1);
    };

    let config = Config::from_env();

    let ocr_provider = OcrProvider::new(&config.ocr)?;
    if !ocr_provider.is_available() {
        tracing::warn!("OCR unavailable - extraction will fail per file");
    }

    let client = ValidationClient::new(&config.validation)?;
    tracing::info!(endpoint = %client.endpoint_url(), "Validation endpoint configured");

    if input_path.is_dir() {
        pipeline::process_folder(&input_path, &ocr_provider, &config.ocr, &client).await;
    } else if input_path.is_file() {
        pipeline::process_file(&input_path, &ocr_provider, &config.ocr, &client).await;
    } else {
        anyhow::bail!("Invalid path provided.");
    }

    Ok(())
}
