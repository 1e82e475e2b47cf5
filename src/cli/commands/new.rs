use anyhow::{Context, Result};
use chrono::Local;
use clap::ArgMatches;
use std::path::PathBuf;
use tracing::info;

use umi_scaffold::config::Config;
use umi_scaffold::{AssumeYes, Generator, NamePolicy, OverwritePrompt, ReaderPrompt, ScaffoldError, report};

use crate::cli::PROGRAM;

pub async fn handle_new(matches: &ArgMatches, config: &Config) -> Result<i32> {
    let Some(raw_name) = matches.get_one::<String>("project-name") else {
        eprintln!("{}", report::usage_text(PROGRAM));
        return Ok(1);
    };

    if raw_name.trim().is_empty() {
        eprintln!("{}", report::empty_name_text());
        return Ok(1);
    }

    let policy = if matches.get_flag("strict-names") {
        NamePolicy::Strict
    } else {
        config.generator.name_policy
    };
    let assume_yes = matches.get_flag("yes") || config.generator.assume_yes;

    let generator = match matches.get_one::<PathBuf>("dir") {
        Some(dir) => Generator::new(dir, policy),
        None => Generator::in_current_dir(policy).context("Cannot read the current directory")?,
    };
    let mut prompt: Box<dyn OverwritePrompt> = if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(ReaderPrompt::stdio())
    };

    match generator.generate(raw_name, prompt.as_mut(), Local::now()).await {
        Ok(generation) => {
            println!("{}", report::generation_text(&generation));
            info!(path = %generation.base_path.display(), "Project created");
            Ok(0)
        }
        Err(ScaffoldError::UserAborted) => {
            println!("{}", report::cancelled_text());
            Ok(0)
        }
        Err(ScaffoldError::InvalidInput(message)) => {
            eprintln!("❌ Error: {}", message);
            Ok(1)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Error al crear el proyecto")),
    }
}
