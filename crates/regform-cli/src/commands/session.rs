use anyhow::{bail, Context, Result};
use colored::Colorize;
use regform::{render_form, Config, FormController, SubmitOutcome};
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// One line of session input
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Set { field: String, value: String },
    Clear { field: String },
    Submit,
    Status,
    Render,
    Wait(Duration),
    Reset,
    Quit,
}

impl Event {
    /// Parses a line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let event = match command {
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    bail!("usage: set <field> <value>");
                }
                Event::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                }
            }
            "clear" => {
                if rest.is_empty() {
                    bail!("usage: clear <field>");
                }
                Event::Clear {
                    field: rest.to_string(),
                }
            }
            "wait" => {
                let ms: u64 = rest
                    .parse()
                    .with_context(|| format!("wait expects milliseconds, got '{}'", rest))?;
                Event::Wait(Duration::from_millis(ms))
            }
            "submit" => Event::Submit,
            "status" => Event::Status,
            "render" => Event::Render,
            "reset" => Event::Reset,
            "quit" | "exit" => Event::Quit,
            other => bail!("unknown command '{}'", other),
        };

        Ok(Some(event))
    }
}

pub async fn execute(config: &Config, script: Option<&Path>) -> Result<()> {
    let mut form = FormController::registration(config);

    // Report banner expiry as it happens
    let mut banner = form.subscribe_banner();
    let banner_message = config.banner.message.clone();
    let watcher = tokio::spawn(async move {
        while banner.changed().await.is_ok() {
            let state = *banner.borrow_and_update();
            if state.visible {
                println!("{}", banner_message.green().bold());
            } else {
                println!("{}", "(banner hidden)".dimmed());
            }
        }
    });

    let lines: Vec<String> = match script {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read script {:?}", path))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };
    let interactive = script.is_none();
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut scripted = lines.into_iter();

    loop {
        let line = if interactive {
            match stdin.next_line().await? {
                Some(line) => line,
                None => break,
            }
        } else {
            match scripted.next() {
                Some(line) => line,
                None => break,
            }
        };

        let event = match Event::parse(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
                continue;
            }
        };

        if event == Event::Quit {
            break;
        }
        apply(&mut form, config, event).await;
    }

    form.shutdown();
    drop(form);
    // Sender is gone once the form is dropped, which ends the watcher
    let _ = watcher.await;
    info!("session ended");
    Ok(())
}

async fn apply(form: &mut FormController, config: &Config, event: Event) {
    match event {
        Event::Set { field, value } => {
            if let Err(e) = form.set_input(&field, &value) {
                warn!("rejected input: {}", e);
                eprintln!("{} {}", "✗".red(), e);
            } else if let Some(err) = form.error(&field) {
                println!("  {} {}", field.bold(), err.message.red());
            }
        }
        Event::Clear { field } => {
            if let Err(e) = form.clear_value(&field) {
                eprintln!("{} {}", "✗".red(), e);
            }
        }
        Event::Submit => match form.submit() {
            Ok(SubmitOutcome::Accepted(submission)) => {
                println!("{} {}", "✓ submitted".green(), submission);
            }
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
            }
            Ok(SubmitOutcome::Rejected(failed)) => {
                println!("{} {} field(s) failed", "✗".red(), failed.len());
                for name in failed {
                    if let Some(err) = form.error(&name) {
                        println!("  {} {}", name.bold(), err.message.red());
                    }
                }
            }
        },
        Event::Status => print_status(form),
        Event::Render => println!("{}", render_form(form, config).into_string()),
        Event::Wait(duration) => tokio::time::sleep(duration).await,
        Event::Reset => form.reset(),
        Event::Quit => {}
    }
}

fn print_status(form: &FormController) {
    let banner = if form.is_submitted() {
        "visible".green()
    } else {
        "hidden".dimmed()
    };
    println!("banner: {}", banner);

    for spec in form.fields() {
        let value = form
            .value(spec.name)
            .map(|v| v.to_string())
            .unwrap_or_default();
        match form.error(spec.name) {
            Some(err) => println!("  {:<14} {:<24} {}", spec.name, value, err.message.red()),
            None => println!("  {:<14} {}", spec.name, value),
        }
    }
}
