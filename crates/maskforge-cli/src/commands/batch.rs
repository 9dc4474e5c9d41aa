use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use maskforge_core::io::StrokeScript;

use super::render::render_script;

#[derive(Args)]
pub struct BatchArgs {
    /// Stroke scripts (TOML)
    #[arg(required = true)]
    pub scripts: Vec<PathBuf>,

    /// Keep going after a script fails
    #[arg(long)]
    pub keep_going: bool,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let pb = ProgressBar::new(args.scripts.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Rendering [{bar:40}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut failed = 0usize;
    for path in &args.scripts {
        pb.set_message(path.display().to_string());
        let result = StrokeScript::load(path)
            .with_context(|| format!("Failed to read script {}", path.display()))
            .and_then(|script| render_script(&script));

        if let Err(e) = result {
            if !args.keep_going {
                pb.abandon();
                return Err(e);
            }
            pb.println(format!("{}: {:#}", path.display(), e));
            failed += 1;
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    let done = args.scripts.len() - failed;
    println!("{done} mask(s) written, {failed} failed");
    if failed > 0 {
        bail!("{failed} script(s) failed");
    }
    Ok(())
}
