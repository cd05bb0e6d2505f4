//! togglemark - toggle markdown markup on a selection from the command line.
//!
//! # Usage
//!
//! ```bash
//! togglemark notes.md --style bold --start 0 --end 5
//! echo "one\ntwo" | togglemark --style quote --start 0 --end 7 --json
//! togglemark --list --modifier cmd
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use togglemark::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use togglemark::editor::EditorBuffer;
use togglemark::markup::Style;
use togglemark::toolbar::{self, Modifier};

/// Toggle markdown markup on a selection
#[derive(Parser, Debug)]
#[command(name = "togglemark", version, about, long_about = None)]
struct Cli {
    /// File to read (stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Style to toggle; repeat to apply several in order
    #[arg(short, long, value_enum)]
    style: Vec<Style>,

    /// Selection start, in UTF-16 code units
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Selection end, in UTF-16 code units (defaults to the start)
    #[arg(long)]
    end: Option<usize>,

    /// Print the result as JSON, including the new selection
    #[arg(long)]
    json: bool,

    /// Modifier key used for shortcut labels
    #[arg(long, value_enum)]
    modifier: Option<Modifier>,

    /// Print the toolbar entries instead of editing
    #[arg(long)]
    list: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_toolbar(modifier: Modifier, json: bool) -> Result<()> {
    let entries = toolbar::entries(modifier);
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in entries {
        let hint = entry
            .shortcut
            .map(|s| format!(" ({})", s.tooltip_hint))
            .unwrap_or_default();
        println!("{:<15} {:<10}{}", entry.style.name(), entry.group.as_str(), hint);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        json: cli.json,
        modifier: cli.modifier,
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    let modifier = effective.modifier.unwrap_or_else(Modifier::for_target_os);

    if cli.list {
        return print_toolbar(modifier, effective.json);
    }
    if cli.style.is_empty() {
        if cli.save || cli.clear {
            return Ok(());
        }
        anyhow::bail!("No style given; pass --style or --list");
    }

    let text = read_input(cli.file.as_ref())?;
    let mut buffer = EditorBuffer::from_text(&text);
    let end = cli.end.unwrap_or(cli.start);
    buffer
        .select(cli.start, end)
        .with_context(|| format!("Invalid selection {}..{}", cli.start, end))?;

    let mut result = None;
    for style in &cli.style {
        tracing::debug!(%style, selection = ?buffer.selection(), "applying style");
        result = Some(buffer.toggle(*style));
    }
    let result = result.context("No style applied")?;

    if effective.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.text);
    }
    Ok(())
}
