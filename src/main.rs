use clap::{Arg, Command};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process;
use umi_scaffold::config::Config;
use umi_scaffold::logging;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let matches = build_cli().get_matches();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            process::exit(1);
        }
    };
    if matches.get_flag("verbose") {
        config.logging.level = "debug".to_string();
    }
    logging::init_logging(&config.logging);

    match run_command(matches, &config).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("{:?}", e);
            process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new(cli::PROGRAM)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Project structure generator for forest monitoring UMIs")
        .long_about("Creates the folder tree and starter files of a geospatial monitoring project, and verifies existing ones")
        .override_usage(format!("{} [OPTIONS] <project-name>\n       {} verify [OPTIONS]", cli::PROGRAM, cli::PROGRAM))
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("project-name")
                .help("Project name, used as directory name and in every template")
                .required(false)
                .index(1)
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .help("Parent directory for the project (defaults to the current directory)")
                .value_parser(clap::value_parser!(PathBuf))
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Overwrite an existing project without asking")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("strict-names")
                .long("strict-names")
                .help("Reject names that are not a single portable path segment")
                .action(clap::ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("verify")
                .about("Check that a project's critical folders and config file exist")
                .arg(
                    Arg::new("path")
                        .short('p')
                        .long("path")
                        .help("Project directory (defaults to the current directory)")
                        .value_parser(clap::value_parser!(PathBuf))
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help("Project name (defaults to config/config.json, then the directory name)")
                )
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
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Debug logging on stderr")
                .global(true)
                .action(clap::ArgAction::SetTrue)
        )
}

async fn run_command(matches: clap::ArgMatches, config: &Config) -> anyhow::Result<i32> {
    match matches.subcommand() {
        Some(("verify", sub_matches)) => cli::commands::verify::handle_verify(sub_matches, config),
        // No subcommand: the positional argument names the project to generate
        _ => cli::commands::new::handle_new(&matches, config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_project_name_is_positional() {
        let matches = build_cli().try_get_matches_from(["umi-scaffold", "Demo"]).unwrap();
        assert!(matches.subcommand().is_none());
        assert_eq!(
            matches.get_one::<String>("project-name").map(String::as_str),
            Some("Demo")
        );
    }

    #[test]
    fn test_missing_name_parses() {
        let matches = build_cli().try_get_matches_from(["umi-scaffold"]).unwrap();
        assert!(matches.subcommand().is_none());
        assert!(matches.get_one::<String>("project-name").is_none());
    }

    #[test]
    fn test_generation_flags() {
        let matches = build_cli()
            .try_get_matches_from(["umi-scaffold", "--yes", "--strict-names", "-d", "/tmp", "Demo"])
            .unwrap();
        assert!(matches.get_flag("yes"));
        assert!(matches.get_flag("strict-names"));
        assert_eq!(matches.get_one::<PathBuf>("dir"), Some(&PathBuf::from("/tmp")));
    }

    #[tokio::test]
    async fn test_missing_name_exits_with_usage_code() {
        let matches = build_cli().try_get_matches_from(["umi-scaffold"]).unwrap();
        let code = run_command(matches, &Config::default()).await.unwrap();
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_blank_name_exits_with_error_code() {
        let matches = build_cli().try_get_matches_from(["umi-scaffold", "   "]).unwrap();
        let code = run_command(matches, &Config::default()).await.unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_verify_flags() {
        let matches = build_cli()
            .try_get_matches_from(["umi-scaffold", "verify", "--strict", "-f", "json"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(sub.get_flag("strict"));
        assert_eq!(sub.get_one::<String>("format").map(String::as_str), Some("json"));
    }
}
