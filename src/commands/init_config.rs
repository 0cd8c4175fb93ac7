use std::path::Path;
use wordrank::config::write_default_config;
use wordrank::{Result, WordRankError};

use crate::ui;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(WordRankError::Other(format!(
            "{} already exists (use --force to replace it)",
            path.display()
        )));
    }
    write_default_config(path)?;
    println!("{}", ui::success_line("Wrote", &path.display().to_string()));
    Ok(())
}
