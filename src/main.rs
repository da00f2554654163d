//! Prefix matcher command-line front-end.
//!
//! Loads configuration and a route table, then resolves paths against it or
//! cross-checks every strategy on it.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use prefix_matcher::config::{self, ConfigLoader, LogConfig, MatcherConfig, RouteTable};
use prefix_matcher::error::{
    report_error, set_error_reporter, ErrorContext, PrefixMatcherError, TracingErrorReporter,
};
use prefix_matcher::matcher::{MatcherStrategy, PathMatcher, PrefixMatcher};

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix_matcher", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve paths against a route table
    Resolve {
        /// Route table file (.toml or .json)
        #[clap(short, long, value_parser)]
        routes: PathBuf,

        /// Strategy to use instead of the configured one
        #[clap(short, long)]
        strategy: Option<MatcherStrategy>,

        /// Print one JSON object per path instead of tab-separated text
        #[clap(long)]
        json: bool,

        /// Paths to resolve
        #[clap(required = true)]
        paths: Vec<String>,
    },

    /// Check that every strategy resolves a route table identically
    Check {
        /// Route table file (.toml or .json)
        #[clap(short, long, value_parser)]
        routes: PathBuf,

        /// Extra paths to check besides the registered patterns
        paths: Vec<String>,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.context("Failed to set global tracing subscriber")
}

fn load_routes(path: &Path) -> Result<RouteTable> {
    RouteTable::from_path(path)
        .map_err(PrefixMatcherError::from)
        .with_context(|| format!("Loading route table {}", path.display()))
}

/// One resolved path in `--json` output.
#[derive(Serialize)]
struct Resolution<'a> {
    path: &'a str,
    value: Option<&'a str>,
}

fn print_resolution(path: &str, value: Option<&str>, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&Resolution { path, value })
            .map_err(PrefixMatcherError::Json)?;
        println!("{line}");
    } else {
        println!("{path}\t{}", value.unwrap_or("-"));
    }
    Ok(())
}

fn resolve(
    config: &MatcherConfig,
    routes: &Path,
    strategy: Option<MatcherStrategy>,
    json: bool,
    paths: &[String],
) -> Result<ExitCode> {
    let table = load_routes(routes)?;
    let strategy = strategy.unwrap_or(config.matcher.strategy);
    let matcher = table
        .build(strategy, &config.matcher.trie)
        .map_err(PrefixMatcherError::from)?;
    info!(strategy = %strategy, routes = table.len(), "Matcher ready");

    let mut failed = false;
    for path in paths {
        match matcher.match_path(path) {
            Ok(value) => print_resolution(path, value.map(String::as_str), json)?,
            Err(e) => {
                report_error(ErrorContext::new(e.into(), "resolve").with_details(path.clone()));
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn check(config: &MatcherConfig, routes: &Path, extra: &[String]) -> Result<ExitCode> {
    let table = load_routes(routes)?;
    let matchers = MatcherStrategy::ALL
        .into_iter()
        .map(|strategy| table.build(strategy, &config.matcher.trie))
        .collect::<Result<Vec<PrefixMatcher<String>>, _>>()
        .map_err(PrefixMatcherError::from)?;

    let mut disagreements = 0usize;
    let queries = table.patterns().chain(extra.iter().map(String::as_str));
    for path in queries {
        let results: Vec<_> = matchers.iter().map(|m| m.match_path(path)).collect();
        if results.windows(2).any(|pair| pair[0] != pair[1]) {
            disagreements += 1;
            for (matcher, result) in matchers.iter().zip(&results) {
                warn!(path, strategy = matcher.name(), result = ?result, "Strategies disagree");
            }
        }
    }

    if disagreements == 0 {
        info!(routes = table.len(), extra = extra.len(), "All strategies agree");
        Ok(ExitCode::SUCCESS)
    } else {
        report_error(
            ErrorContext::new(
                PrefixMatcherError::Custom(format!("{disagreements} paths resolved differently")),
                "check",
            )
            .with_details(routes.display().to_string()),
        );
        Ok(ExitCode::FAILURE)
    }
}

fn gen_config(output: &Path) -> Result<ExitCode> {
    let default_config = MatcherConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(PrefixMatcherError::Io)
            .with_context(|| format!("Creating {}", parent.display()))?;
    }

    let toml = toml::to_string_pretty(&default_config).map_err(PrefixMatcherError::Toml)?;
    std::fs::write(output, toml).map_err(PrefixMatcherError::Io)?;

    info!("Default configuration written to {:?}", output);
    Ok(ExitCode::SUCCESS)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX)
        .load()
        .map_err(PrefixMatcherError::from)
        .context("Loading configuration")?;

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Resolve {
            routes,
            strategy,
            json,
            paths,
        } => resolve(&config, &routes, strategy, json, &paths),
        Command::Check { routes, paths } => check(&config, &routes, &paths),
        Command::GenConfig { output } => gen_config(&output),
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
