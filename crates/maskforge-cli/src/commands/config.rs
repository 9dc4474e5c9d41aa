use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use maskforge_core::io::StrokeScript;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save an example StrokeScript as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = StrokeScript::default().to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write script to {}", path.display()))?;
        println!("Default stroke script saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
