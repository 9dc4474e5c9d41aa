use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use maskforge_core::config::SessionOptions;
use maskforge_core::io::StrokeScript;
use maskforge_core::session::{EditSession, MaskCollector};
use tracing::info;

use crate::summary::{print_render_summary, RenderReport};

#[derive(Args)]
pub struct RenderArgs {
    /// Stroke script (TOML)
    pub script: PathBuf,

    /// Mask output path (overrides the script)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview output path (overrides the script)
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut script = StrokeScript::load(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    if let Some(ref output) = args.output {
        script.output = output.clone();
    }
    if let Some(ref preview) = args.preview {
        script.preview = Some(preview.clone());
    }

    let report = render_script(&script)?;
    print_render_summary(&report);
    Ok(())
}

/// Replay `script` through an edit session and write its outputs.
pub fn render_script(script: &StrokeScript) -> Result<RenderReport> {
    let options = SessionOptions {
        viewport: script.viewport,
        preview: script.preview.is_some(),
        ..SessionOptions::default()
    };

    let mut session = EditSession::open(&script.input, options)
        .with_context(|| format!("Failed to load {}", script.input.display()))?;
    let events_applied = script.replay_into(session.controller_mut());

    let controller = session.controller();
    let geometry = *controller.geometry();
    let strokes = controller.strokes().len();
    let marked_display_pixels = controller.mark_buffer().marked_count();
    let coverage = controller.mark_buffer().coverage();

    let mut sink = MaskCollector::default();
    session.complete(&mut sink)?;

    let mask = sink
        .mask
        .context("Session completed without delivering a mask")?;
    mask.save_png(&script.output)
        .with_context(|| format!("Failed to write mask {}", script.output.display()))?;
    info!(output = %script.output.display(), "Mask saved");

    if let (Some(path), Some(preview)) = (&script.preview, &sink.preview) {
        preview
            .save_png(path)
            .with_context(|| format!("Failed to write preview {}", path.display()))?;
        info!(preview = %path.display(), "Preview saved");
    }

    Ok(RenderReport {
        input: script.input.clone(),
        output: script.output.clone(),
        preview: script.preview.clone(),
        geometry,
        events: script.events.len(),
        events_applied,
        strokes,
        marked_display_pixels,
        coverage,
        edit_pixels: mask.edit_pixel_count(),
    })
}
