mod config;
mod logging;
mod report;
mod runner;
mod script;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use forms_engine::Page;
use forms_logging::forms_info;

use logging::LogDestination;
use report::Report;
use runner::ScriptRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Replays scripted form interactions against a dashboard page.
#[derive(Parser, Debug)]
#[command(name = "forms_app", version)]
struct Cli {
    /// HTML page containing the forecast, email and download forms.
    #[arg(long)]
    page: PathBuf,
    /// RON list of steps to replay.
    #[arg(long)]
    script: PathBuf,
    /// Optional RON file overriding labels, alert text and delay.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "terminal")]
    log: LogDestination,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    let html = fs::read_to_string(&cli.page)
        .with_context(|| format!("reading page {}", cli.page.display()))?;
    let page = Page::parse(&html).with_context(|| format!("parsing page {}", cli.page.display()))?;
    let script_text = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading script {}", cli.script.display()))?;
    let steps = script::parse_script(&script_text)
        .with_context(|| format!("parsing script {}", cli.script.display()))?;
    let config = config::load_config(cli.config.as_deref())?;

    let started_utc = Utc::now().to_rfc3339();
    forms_info!("replaying {} steps against {:?}", steps.len(), cli.page);
    let mut runner = ScriptRunner::new(page, config).context("starting timer runtime")?;
    let records = runner.run(&steps)?;

    let report = Report {
        started_utc,
        page: cli.page.display().to_string(),
        steps: records,
    };
    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
