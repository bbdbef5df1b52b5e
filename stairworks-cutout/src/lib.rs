//! stairworks-cutout - background removal for product photos
//!
//! Uploads a stair photo to remove.bg and writes the transparent PNG next to
//! it, for use as a configurator preview image.
//!
//! ```text
//! INPUT ──read──► multipart POST (X-Api-Key) ──► PNG bytes ──write──► OUTPUT
//! ```

pub mod removebg;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument};

pub use removebg::{resolve_api_key, CutoutError, RemoveBgClient, Result, API_KEY_ENV, DEFAULT_ENDPOINT};

/// Cutout subcommand arguments
#[derive(Args, Debug, Clone)]
pub struct CutoutArgs {
    /// Image to remove the background from
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <input stem>-no-bg.png next to the input)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Output size requested from remove.bg (auto, preview, full, ...)
    #[arg(long, default_value = "auto")]
    pub size: String,

    /// remove.bg API key (default: $REMOVE_BG_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Suppress progress spinner
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Spinner on stderr, unless quiet or stderr is not a terminal
fn spinner(msg: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet || !std::io::stderr().is_terminal() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// `photo.jpg` → `photo-no-bg.png` in the same directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}-no-bg.png"))
}

/// Execute the cutout command. Returns the path written.
#[instrument(skip_all, fields(input = %args.input.display(), size = %args.size))]
pub async fn run_cutout(args: CutoutArgs) -> Result<PathBuf> {
    stairworks_core::config::load_dotenv();

    let image = tokio::fs::read(&args.input)
        .await
        .map_err(|source| CutoutError::ReadInput {
            path: args.input.clone(),
            source,
        })?;
    let api_key = resolve_api_key(args.api_key.clone(), std::env::var(API_KEY_ENV).ok())?;

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let client = RemoveBgClient::with_endpoint(api_key, &args.endpoint);

    let pb = spinner("Removing background...", args.quiet);
    let result = client
        .remove_background(image, &file_name, &args.size)
        .await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let png = result?;

    tokio::fs::write(&out, &png)
        .await
        .map_err(|source| CutoutError::WriteOutput {
            path: out.clone(),
            source,
        })?;

    info!(bytes = png.len(), out = %out.display(), "background removed");
    Ok(out)
}
