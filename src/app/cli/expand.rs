//! Expand command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ExpandConfig};

pub fn run_expand(
    input: &str,
    force: bool,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let mut config = match config_path {
        Some(path) => ExpandConfig::load(&path)?,
        None => ExpandConfig::from_env(),
    };
    if force {
        config.force_context = true;
    }

    let expanded = if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        crate::app::api::expand_text(&text, &std::env::current_dir()?, &config)?
    } else {
        crate::app::api::expand_file(Path::new(input), &config)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &expanded)?;
            eprintln!("✅ Wrote expanded document to {}", path.display());
        }
        None => println!("{}", expanded),
    }
    Ok(())
}
