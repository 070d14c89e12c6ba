use anyhow::{anyhow, Result};
use colored::Colorize;
use regform::{Config, FormController};

/// Prints the verdict for one value; returns whether it passed
pub fn execute(config: &Config, field: &str, raw: &str) -> Result<bool> {
    let form = FormController::registration(config);
    let spec = form.field(field).ok_or_else(|| {
        let known: Vec<_> = form.fields().iter().map(|f| f.name).collect();
        anyhow!("unknown field '{}' (fields: {})", field, known.join(", "))
    })?;

    let value = spec.parse_input(raw)?;
    match spec.validate(&value) {
        Ok(()) => {
            println!("{} {}", "✓".green(), format!("{}: OK", spec.name).bold());
            Ok(true)
        }
        Err(err) => {
            println!(
                "{} {}: {} ({})",
                "✗".red(),
                spec.name.bold(),
                err.message,
                err.kind.as_str().dimmed()
            );
            Ok(false)
        }
    }
}
