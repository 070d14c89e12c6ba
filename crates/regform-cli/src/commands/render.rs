use anyhow::{Context, Result};
use colored::Colorize;
use regform::{render_page, Config, FormController};
use std::fs;
use std::path::Path;

pub fn execute(config: &Config, out: Option<&Path>) -> Result<()> {
    let form = FormController::registration(config);
    let html = render_page(&form, config).into_string();

    match out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("{} {}", "✓ Form written to".green(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
