use anyhow::Context;
use bmi_tui::bmi::Category;
use bmi_tui::config::Config;
use bmi_tui::locale::Locale;
use bmi_tui::logging::{init_tracing, LogTarget};
use bmi_tui::ui::form::{FormIntent, FormReducer, FormState, Outcome};
use bmi_tui::ui::mvi::Reducer;
use bmi_tui::ui::runtime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "bmi-tui", version, about = "Body Mass Index calculator for the terminal")]
struct Cli {
    /// Path to config file (default: ~/.config/bmi-tui/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured language
    #[arg(long, value_enum)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate once and print the result instead of opening the form
    Calc {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CalcReport {
    bmi: f64,
    category: Category,
    label: &'static str,
    tip: &'static str,
    scale_position: f64,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("loading config from {}", Config::config_path().display())
        })?,
    };
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }

    match cli.command {
        Some(Command::Calc {
            height,
            weight,
            json,
        }) => {
            init_tracing(&config.logging, LogTarget::Stderr)?;
            calc(config.ui.locale, height, weight, json)
        }
        None => {
            init_tracing(
                &config.logging,
                LogTarget::File(config.logging.file_path()),
            )?;
            runtime::run(&config.ui).context("running terminal UI")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn calc(locale: Locale, height: String, weight: String, json: bool) -> anyhow::Result<ExitCode> {
    let state = [
        FormIntent::EditHeight(height),
        FormIntent::EditWeight(weight),
        FormIntent::Calculate,
    ]
    .into_iter()
    .fold(FormState::default(), FormReducer::reduce);

    match state.outcome {
        Outcome::Computed(result) => {
            tracing::debug!(bmi = result.value, "Calculated");
            let report = CalcReport {
                bmi: result.value,
                category: result.category,
                label: result.category.label(locale),
                tip: result.tip(locale),
                scale_position: result.scale_position(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let texts = locale.texts();
                println!(
                    "{} {}",
                    texts.your_bmi,
                    bmi_tui::ui::view::format_bmi(report.bmi)
                );
                println!("{}", report.label);
                println!("{}", report.tip);
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Error(error) => {
            tracing::debug!(reason = error.reason(), "Validation failed");
            eprintln!("{}", error.message(locale));
            Ok(ExitCode::from(1))
        }
        Outcome::Idle => anyhow::bail!("height and weight must not be empty"),
    }
}
