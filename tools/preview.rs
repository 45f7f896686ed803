/// Preview — interactive shell for trying the transform.
///
/// Usage: preview [--config <path>] [--seed <n>] [--style <plain|bardic>]
///
/// Commands:
///   style <plain|bardic>  — set the active style
///   seed <n>              — reseed opener selection
///   trace <text>          — show the output of every stage
///   help                  — list commands
///   quit                  — exit
/// Any other line is transformed with the active style.

use olde_english::core::engine::OldeEngine;
use olde_english::core::reply::truncate_chars;
use olde_english::schema::config::EngineConfig;
use olde_english::schema::request::{Style, TransformOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = EngineConfig::default();
    let mut seed_override = None;
    let mut style_override = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config = EngineConfig::load_from_ron(Path::new(&args[i])).unwrap_or_else(|e| {
                    eprintln!("Error loading config '{}': {}", args[i], e);
                    std::process::exit(1);
                });
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed_override = args[i].parse::<u64>().ok();
            }
            "--style" if i + 1 < args.len() => {
                i += 1;
                style_override = Some(Style::parse(&args[i]));
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Some(seed) = seed_override {
        config.seed = Some(seed);
    }
    if let Some(style) = style_override {
        config.default_style = style;
    }

    let mut style = config.default_style;
    let mut engine = OldeEngine::builder().from_config(&config).build();

    println!("Style: {}", style);
    match config.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: random"),
    }
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("ye> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let (cmd, rest) = match line.trim_start().split_once(' ') {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest),
            None => (line.trim().to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Fare thee well.");
                break;
            }
            "help" | "h" | "?" => print_commands(),
            "style" => {
                style = Style::parse(rest);
                println!("Style set to {}", style);
            }
            "seed" => match rest.trim().parse::<u64>() {
                Ok(seed) => {
                    config.seed = Some(seed);
                    engine = OldeEngine::builder().from_config(&config).build();
                    println!("Seed set to {}", seed);
                }
                Err(_) => println!("Usage: seed <n>"),
            },
            "trace" => {
                for step in engine.trace(rest) {
                    println!("  {:<22} {}", step.stage.name(), step.output);
                }
            }
            _ => {
                let out = engine.transform(line, &TransformOptions::with_style(style));
                println!("{}", truncate_chars(&out, config.reply_limit));
            }
        }
    }
}

fn print_usage() {
    println!("Usage: preview [--config <path>] [--seed <n>] [--style <plain|bardic>]");
}

fn print_commands() {
    println!("Commands:");
    println!("  style <plain|bardic>  set the active style");
    println!("  seed <n>              reseed opener selection");
    println!("  trace <text>          show the output of every stage");
    println!("  help                  list commands");
    println!("  quit                  exit");
    println!("Any other line is transformed.");
}
