//! Command-line interface for peml
//! Compiles Plain English Markup Language files to HTML, or dumps intermediate stages.
//!
//! Usage:
//!   peml `<file>`...                  - Compile each file to `<file>.html`
//!   peml                              - Compile standard input to standard output
//!   peml `<file>` --stdout            - Print the document instead of writing a file
//!   peml `<file>` --emit `<stage>`      - Dump atoms / paragraphs / ir as JSON
//!   peml `<file>` --extension htm     - Write `<file>.htm` instead

use clap::{Arg, ArgAction, Command};
use peml::config::{Loader, PemlConfig, LOCAL_CONFIG_FILE};
use peml::transforms::standard::{BUILDING, SEGMENTING};
use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

const EMIT_STAGES: [&str; 4] = ["html", "atoms", "paragraphs", "ir"];

fn main() {
    let matches = Command::new("peml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile Plain English Markup Language to HTML")
        .arg(
            Arg::new("files")
                .help("Source files; standard input is read when none are given")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append)
                .index(1),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print results to standard output instead of writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .short('e')
                .help("Pipeline stage to output")
                .value_parser(EMIT_STAGES)
                .default_value("html"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .value_name("EXT")
                .help("Extension appended to each input file name (overrides output.extension)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug output)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("extension"),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });
    let emit = matches.get_one::<String>("emit").map_or("html", String::as_str);
    let to_stdout = matches.get_flag("stdout") || emit != "html";
    let files: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|files| files.collect())
        .unwrap_or_default();

    if files.is_empty() {
        handle_stdin(&config, emit);
        return;
    }

    let mut failed = false;
    for file in files {
        if let Err(e) = handle_file(&config, file, emit, to_stdout) {
            eprintln!("{}: {}", file.display(), e);
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(
    path: Option<&String>,
    extension: Option<&String>,
) -> Result<PemlConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(extension) = extension {
        loader = loader.set_override("output.extension", extension.as_str())?;
    }
    loader.build()
}

/// Run the requested stage on `source` and format its output.
fn run_stage(source: &str, emit: &str) -> Result<String, Box<dyn Error>> {
    let output = match emit {
        "atoms" => {
            let paragraphs = SEGMENTING.run(source.to_string())?;
            let statements: Vec<_> = paragraphs
                .iter()
                .flat_map(|paragraph| paragraph.statements())
                .collect();
            serde_json::to_string_pretty(&statements)?
        }
        "paragraphs" => serde_json::to_string_pretty(&SEGMENTING.run(source.to_string())?)?,
        "ir" => serde_json::to_string_pretty(&BUILDING.run(source.to_string())?)?,
        _ => peml::compile(source)?,
    };
    Ok(output)
}

fn print_output(config: &PemlConfig, output: &str, emit: &str) {
    if emit == "html" && !config.output.trailing_newline {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Compile standard input to standard output
fn handle_stdin(config: &PemlConfig, emit: &str) {
    if config.input.announce_stdin {
        eprintln!("No arguments: reading from STDIN");
    }
    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading standard input: {}", e);
        std::process::exit(1);
    }
    match run_stage(&source, emit) {
        Ok(output) => print_output(config, &output, emit),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Compile one file, writing `<file>.<extension>` unless printing to stdout
fn handle_file(
    config: &PemlConfig,
    path: &Path,
    emit: &str,
    to_stdout: bool,
) -> Result<(), Box<dyn Error>> {
    let source = std::fs::read_to_string(path)?;
    let output = run_stage(&source, emit)?;
    if to_stdout {
        print_output(config, &output, emit);
    } else {
        let output_path = config.output.output_path(path);
        std::fs::write(&output_path, output)?;
        log::info!("wrote {}", output_path.display());
    }
    Ok(())
}
