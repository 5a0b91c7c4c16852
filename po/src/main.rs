use std::fs;
use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use promptopt::cli::Cli;
use promptopt::config::Config;
use promptopt::{PromptOptimizer, STDIN_PROMPT};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > RUST_LOG > WARN
    let level = cli_log_level.or(config_log_level).map(|s| match s.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            tracing::Level::WARN
        }
    });

    let filter = match level {
        Some(level) => EnvFilter::from_default_env().add_directive(level.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn read_prompt_from_stdin() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", STDIN_PROMPT)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).context("Failed to read prompt from stdin")?;
    if read == 0 {
        return Err(eyre!("No prompt provided on stdin"));
    }

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let tone = cli.tone.or(config.tone).unwrap_or_default();
    let profile_path = cli.profile.or(config.profile);
    info!(%tone, ?profile_path, "promptopt starting");

    let prompt = match cli.prompt {
        Some(prompt) => prompt,
        None => read_prompt_from_stdin()?,
    };

    let optimizer = match &profile_path {
        Some(path) => PromptOptimizer::from_file(path).context("Failed to load profile")?,
        None => PromptOptimizer::default(),
    };
    let optimized = optimizer.optimize(&prompt, tone.as_str());

    match cli.output_file {
        Some(path) => {
            fs::write(&path, &optimized).context(format!("Failed to write output file {}", path.display()))?;
            info!("Wrote {} bytes to {}", optimized.len(), path.display());
            eprintln!("{} Wrote optimized prompt to {}", "✓".green(), path.display().to_string().cyan());
        }
        None => println!("{}", optimized),
    }

    Ok(())
}
