use anyhow::{Context, Result};
use chrono::Local;
use clap::ArgMatches;
use std::path::PathBuf;

use umi_scaffold::config::{Config, OutputFormat};
use umi_scaffold::verifier::{self, VerificationReport};
use umi_scaffold::{NamePolicy, ProjectName, report};

pub fn handle_verify(matches: &ArgMatches, config: &Config) -> Result<i32> {
    let base_path = match matches.get_one::<PathBuf>("path") {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Cannot read the current directory")?,
    };

    let project_name = match matches.get_one::<String>("name") {
        Some(raw) => ProjectName::parse(raw, NamePolicy::Permissive)?,
        None => verifier::resolve_project_name(&base_path),
    };

    let format = match matches.get_one::<String>("format") {
        Some(format) => format.parse()?,
        None => config.verifier.format,
    };
    let fail_on_missing = matches.get_flag("strict") || config.verifier.fail_on_missing;

    let verification = verifier::verify_project(&base_path, &project_name);
    print_report(&verification, format)?;

    Ok(verification.exit_code(fail_on_missing))
}

fn print_report(verification: &VerificationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", report::verification_text(verification, Local::now())),
        OutputFormat::Json => println!("{}", report::verification_json(verification)?),
    }
    Ok(())
}
