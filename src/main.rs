//! Resume insight: resume analysis with ATS scoring, skill gaps, and an AI review

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use resume_insight::analysis::AnalysisEngine;
use resume_insight::cli::{self, Cli, Commands, ConfigAction};
use resume_insight::output::formatter::formatter_for;
use resume_insight::{Config, Result, ResumeInsightError};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            output,
            save,
            no_ai,
        } => run_analyze(&config, file, &output, save, no_ai).await,

        Commands::Config { action } => run_config(&config, action),
    }
}

async fn run_analyze(
    config: &Config,
    file: PathBuf,
    output: &str,
    save: Option<PathBuf>,
    no_ai: bool,
) -> Result<()> {
    cli::validate_file_extension(&file, &["pdf", "doc", "docx", "txt"])
        .map_err(ResumeInsightError::InvalidInput)?;
    let output_format = cli::parse_output_format(output).map_err(ResumeInsightError::InvalidInput)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .map_err(|e| ResumeInsightError::OutputFormatting(e.to_string()))?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Analyzing {}", file.display()));

    let engine = AnalysisEngine::new(config, !no_ai)?;
    let result = engine.analyze(&file).await;
    spinner.finish_and_clear();
    let result = result?;

    let formatter = formatter_for(&output_format, config.output.color_output);
    let rendered = formatter.format_result(&result)?;

    match save {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn run_config(config: &Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| ResumeInsightError::Configuration(e.to_string()))?;
            println!("{}", rendered);
        }
        ConfigAction::Reset => {
            Config::reset()?;
            println!("Configuration reset to defaults");
        }
    }
    Ok(())
}
