//! Command-line interface for dtcss
//! This binary builds CSS custom property stylesheets from design token files.
//!
//! Usage:
//!   dtcss build [--root `<dir>`] [--config `<file>`] [--set `<key=value>`]...  - Build every configured platform
//!   dtcss flatten `<file>` [--references `<mode>`]                             - Print the flattened tokens of one file
//!   dtcss list-formats                                                        - List all available formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use dtcss::config::Loader;
use dtcss::formats::FormatRegistry;
use dtcss::parser::{Dictionary, ReferenceMode, TokenSource};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let matches = Command::new("dtcss")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build CSS custom properties from design token files")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (-v for info, -vv for debug); RUST_LOG takes precedence")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Build every platform of the project configuration")
                .arg(
                    Arg::new("root")
                        .long("root")
                        .short('r')
                        .help("Project root containing the tokens and dtcss.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value("."),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Additional configuration file, layered over dtcss.toml")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .help("Override a configuration key (e.g. output.header=...)")
                        .value_name("KEY=VALUE")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("flatten")
                .about("Print the flattened tokens of one file as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the token file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(1),
                )
                .arg(
                    Arg::new("references")
                        .long("references")
                        .help("How references are written")
                        .value_parser(ReferenceMode::ALL.map(|m| m.as_str()))
                        .default_value("wrapped"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available stylesheet formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("build", sub)) => handle_build_command(sub),
        Some(("flatten", sub)) => handle_flatten_command(sub),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

/// Handle the build command
fn handle_build_command(matches: &ArgMatches) {
    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut loader = Loader::new().with_project_root(&root);
    if let Some(config) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(config);
    }
    for setting in matches.get_many::<String>("set").into_iter().flatten() {
        let Some((key, value)) = setting.split_once('=') else {
            fail(format!("Invalid --set '{setting}', expected KEY=VALUE"));
        };
        loader = loader
            .set_override(key.trim(), value.to_string())
            .unwrap_or_else(|e| fail(format!("Invalid --set '{setting}': {e}")));
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| fail(format!("Configuration error: {e}")));

    let report =
        dtcss::build(&config, &root).unwrap_or_else(|e| fail(format!("Build error: {e}")));

    for skipped in &report.skipped {
        eprintln!("Skipped {}: {}", skipped.path.display(), skipped.error);
    }
    tracing::info!(
        sources = report.token_files(),
        artifacts = report.artifacts.len(),
        "build finished"
    );
    println!("Build completed!");
}

/// Handle the flatten command
fn handle_flatten_command(matches: &ArgMatches) {
    let path = matches
        .get_one::<PathBuf>("path")
        .unwrap_or_else(|| fail("A token file is required"));
    let mode = matches
        .get_one::<String>("references")
        .map(|m| m.parse::<ReferenceMode>())
        .transpose()
        .unwrap_or_else(|e| fail(e))
        .unwrap_or(ReferenceMode::Wrapped);

    let source = TokenSource::from_path(path)
        .unwrap_or_else(|e| fail(format!("Error reading {}: {e}", path.display())));
    let dictionary = Dictionary::from_sources(std::slice::from_ref(&source));

    let tokens = dictionary.resolved(mode);
    let formatted = serde_json::to_string_pretty(&tokens)
        .unwrap_or_else(|e| fail(format!("Error formatting tokens: {e}")));
    println!("{formatted}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        println!("  {name}");
        if let Ok(format) = registry.get(&name) {
            println!("    {}", format.description());
        }
        println!();
    }
}
