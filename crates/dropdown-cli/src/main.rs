//! Dropdown CLI - validate manifests and compute picker placement.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

use clap::{Parser, Subcommand, ValueEnum};
use dropdown_core::{Rect, Size};
use dropdown_widgets::{place, OverlayGeometry, PlacementInput};
use dropdown_yaml::{Manifest, ManifestError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "dropdown")]
#[command(about = "Material dropdown manifest tool")]
#[command(version)]
struct Cli {
    /// Log verbosely (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dropdown manifest
    Check {
        /// Path to the manifest YAML
        manifest: PathBuf,
    },

    /// Compute where the picker opens for an anchor
    Place {
        /// Path to the manifest YAML
        manifest: PathBuf,

        /// Anchor frame in window coordinates: x,y,width,height
        #[arg(long, value_parser = parse_rect)]
        anchor: Rect,

        /// Window size: width,height
        #[arg(long, value_parser = parse_size)]
        viewport: Size,

        /// Lay out right-to-left
        #[arg(long)]
        rtl: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest has no items to place")]
    NoItems,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { manifest } => check_manifest(&manifest).map(|report| print!("{report}")),
        Commands::Place {
            manifest,
            anchor,
            viewport,
            rtl,
            format,
        } => place_picker(&manifest, anchor, viewport, rtl, format).map(|out| println!("{out}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}

fn check_manifest(path: &Path) -> Result<String, CliError> {
    let manifest = Manifest::load(path)?;
    log::info!("manifest {} is valid", path.display());

    let config = &manifest.config;
    let selected = manifest
        .selected_index()
        .map_or_else(|| "none".to_string(), |i| i.to_string());
    Ok(format!(
        "Manifest valid: {}\n  Items: {} ({} present)\n  Visible rows: {}\n  Row height: {}\n  Selected index: {}\n",
        path.display(),
        manifest.data.len(),
        manifest.present_items(),
        config.visible_item_count(manifest.data.len()),
        config.item_size(),
        selected,
    ))
}

fn place_picker(
    path: &Path,
    anchor: Rect,
    viewport: Size,
    rtl: bool,
    format: Format,
) -> Result<String, CliError> {
    let manifest = Manifest::load(path)?;
    let geometry = placement(&manifest, anchor, viewport, rtl)?;
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&geometry)?),
        Format::Text => Ok(render_text(&geometry)),
    }
}

fn placement(
    manifest: &Manifest,
    anchor: Rect,
    viewport: Size,
    rtl: bool,
) -> Result<OverlayGeometry, CliError> {
    let input = PlacementInput::from_config(
        &manifest.config,
        anchor,
        viewport,
        rtl,
        manifest.data.len(),
        manifest.selected_index(),
    );
    place(&input).ok_or(CliError::NoItems)
}

fn render_text(geometry: &OverlayGeometry) -> String {
    let visual = geometry.visual_frame();
    format!(
        "frame: {} {} {}x{}\nshift: {}\nscroll: {}\ninsets: {} {}\nvisual: {} {} {}x{}",
        geometry.left,
        geometry.top,
        geometry.width,
        geometry.height,
        geometry.vertical_shift,
        geometry.scroll_offset,
        geometry.left_inset,
        geometry.right_inset,
        visual.x,
        visual.y,
        visual.width,
        visual.height,
    )
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated numbers, got '{}'", N, s));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f32>()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
        if !slot.is_finite() {
            return Err(format!("invalid number '{}'", part));
        }
    }
    Ok(out)
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, width, height] = parse_numbers::<4>(s)?;
    if width < 0.0 || height < 0.0 {
        return Err("anchor size must not be negative".to_string());
    }
    Ok(Rect::new(x, y, width, height))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [width, height] = parse_numbers::<2>(s)?;
    if width <= 0.0 || height <= 0.0 {
        return Err("viewport must be larger than zero".to_string());
    }
    Ok(Size::new(width, height))
}
