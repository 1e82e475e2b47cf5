use chrono::Local;
use clap::{Arg, Command};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process;
use tracing::warn;
use umi_scaffold::config::{Config, OutputFormat};
use umi_scaffold::{logging, report, verifier};

fn main() {
    // Load environment variables from .env file
    dotenv().ok();
    let matches = Command::new("umi-verify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks the critical folders and config file of the project in the current directory")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 1 when the structure is incomplete")
                .action(clap::ArgAction::SetTrue)
        )
        .get_matches();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("⚠️  {}; using defaults", e);
        Config::default()
    });
    logging::init_logging(&config.logging);

    let base_path = std::env::current_dir().unwrap_or_else(|e| {
        warn!(error = %e, "Cannot read the current directory, checking relative paths");
        PathBuf::from(".")
    });

    let project_name = verifier::resolve_project_name(&base_path);

    let format = match matches.get_one::<String>("format") {
        Some(value) => value.parse().unwrap_or(config.verifier.format),
        None => config.verifier.format,
    };
    let fail_on_missing = matches.get_flag("strict") || config.verifier.fail_on_missing;

    let verification = verifier::verify_project(&base_path, &project_name);
    match format {
        OutputFormat::Text => println!("{}", report::verification_text(&verification, Local::now())),
        OutputFormat::Json => match report::verification_json(&verification) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                warn!(error = %e, "JSON report failed, printing text instead");
                println!("{}", report::verification_text(&verification, Local::now()));
            }
        },
    }

    process::exit(verification.exit_code(fail_on_missing));
}
