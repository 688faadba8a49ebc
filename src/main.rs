// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use partbook::config::AppConfig;
use partbook::parts::{format_voices_label, PartListModel};
use partbook::score::{NotationHandle, ScoreContext};
use partbook::ui::{App, UiOutcome};

/// Instrument names for the generated demo score
const DEMO_INSTRUMENTS: &[&str] = &[
    "Flute",
    "Oboe",
    "Clarinet in Bb",
    "Bassoon",
    "Horn in F",
    "Violin I",
    "Violin II",
    "Viola",
    "Violoncello",
    "Contrabass",
];

fn print_usage() {
    println!("PARTBOOK - Part list editor for musical scores");
    println!();
    println!("Usage: partbook [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <PATH>      Load display strings and UI options from a TOML file");
    println!("  --log <PATH>         Write a debug log to PATH (the TUI owns the terminal)");
    println!("  --demo-parts <N>     Number of parts in the generated demo score (default 4)");
    println!("  --help               Show this help message");
}

/// Build a demo score context with a master and some excerpts
fn demo_context(parts: usize) -> ScoreContext {
    let mut ctx = ScoreContext::new(NotationHandle::master("Demo Symphony"));

    for i in 0..parts {
        let title = DEMO_INSTRUMENTS[i % DEMO_INSTRUMENTS.len()];
        let excerpt = NotationHandle::excerpt(title);

        // Vary the voice setups a little so the labels are interesting
        if i % 3 == 1 {
            excerpt.set_voice_visible(2, false);
            excerpt.set_voice_visible(3, false);
        } else if i % 3 == 2 {
            excerpt.set_voice_visible(0, false);
        }

        ctx.add_excerpt(excerpt);
    }

    ctx
}

/// Send debug logging to a file; stderr would garble the TUI
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {:?}", path))?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut log_path: Option<PathBuf> = None;
    let mut demo_parts: usize = 4;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path");
                    std::process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--log" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --log requires a path");
                    std::process::exit(1);
                }
                log_path = Some(PathBuf::from(&args[i]));
            }
            "--demo-parts" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --demo-parts requires a number");
                    std::process::exit(1);
                }
                demo_parts = args[i]
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid part count: {}", args[i]))?;
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Some(path) = &log_path {
        init_logging(path)?;
    }

    let config = match &config_path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => AppConfig::default(),
    };

    let mut ctx = demo_context(demo_parts);
    let mut model = PartListModel::with_strings(config.strings.clone());
    model.load(&ctx);

    // The app restores the terminal on drop, before the summary prints
    let outcome = {
        let mut app = App::new(&config.ui)?;
        app.run(&mut model, &mut ctx)?
    };

    match outcome {
        UiOutcome::Applied => {
            println!("Applied part list ({} parts):", ctx.excerpts().len());
            for excerpt in ctx.excerpts() {
                let voices = format_voices_label(&excerpt.voices_visibility(), &config.strings);
                let opened = if excerpt.opened() { " [open]" } else { "" };
                println!("  {} (voices: {}){}", excerpt.title(), voices, opened);
            }
            match ctx.current() {
                Some(current) => println!("Active notation: {}", current.title()),
                None => println!("Active notation: none"),
            }
        }
        UiOutcome::Cancelled => {
            println!("Cancelled; part list unchanged");
        }
    }

    Ok(())
}
