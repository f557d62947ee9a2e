use analytics::MetricsEngine;
use anyhow::{Context, Result};
use benchmark::BenchmarkComparator;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use configuration::Config;
use core_types::Benchmark;
use drawdown::DrawdownExtractor;
use ingest::parse_portfolio_csv;
use risk::RiskEngine;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Meridian portfolio analytics application.
fn main() -> Result<()> {
    // Initialize structured logging, honouring RUST_LOG when set.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize logging")?;

    // Parse command-line arguments and execute the appropriate command.
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Descriptive portfolio analytics from a valuation CSV export.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a portfolio valuation export and print the report.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the CSV export (title line, header line, data rows).
    #[arg(long)]
    file: PathBuf,

    /// Overrides the configured annual risk-free rate (a fraction, e.g. 0.03).
    #[arg(long)]
    risk_free_rate: Option<Decimal>,

    /// Emits the full report as one JSON document instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// The full set of analysis sections, in presentation order.
#[derive(Serialize)]
struct AnalysisReport {
    summary: analytics::PerformanceSummary,
    annual_returns: Vec<analytics::AnnualReturn>,
    correlations: analytics::CorrelationSet,
    risk: risk::RiskMetrics,
    benchmarks: Vec<benchmark::BenchmarkComparison>,
    drawdowns: drawdown::DrawdownAnalysis,
}

/// Handles the orchestration of one analysis run: ingest the file, run the
/// four engines over the shared record sequence, render the report.
fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = configuration::load_config().context("Failed to load config.toml")?;
    let risk_free_rate = args
        .risk_free_rate
        .unwrap_or(config.analysis.risk_free_rate);

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    info!(file = %args.file.display(), %risk_free_rate, "analyzing valuation export");

    let outcome = parse_portfolio_csv(&text);
    if !outcome.errors.is_empty() {
        for parse_error in &outcome.errors {
            error!("{parse_error}");
        }
        anyhow::bail!(
            "{} fatal parse error(s) in {}",
            outcome.errors.len(),
            args.file.display()
        );
    }
    let records = outcome.records;
    info!(
        records = records.len(),
        warnings = outcome.warnings.len(),
        "export parsed"
    );

    // The four engines are independent consumers of the same immutable
    // record sequence.
    let engine = MetricsEngine::new();
    let report = AnalysisReport {
        summary: engine.summary(&records)?,
        annual_returns: engine.annual_returns(&records),
        correlations: engine.correlations(&records),
        risk: RiskEngine::new(risk_free_rate).calculate(&records),
        benchmarks: BenchmarkComparator::new(risk_free_rate).compare(&records),
        drawdowns: DrawdownExtractor::new().analyze(&records),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render_summary(&report);
    render_annual_returns(&report, &config);
    render_correlations(&report, &config);
    render_risk(&report);
    render_benchmarks(&report, &config);
    render_drawdowns(&report);

    Ok(())
}

// ==============================================================================
// Table Rendering
// ==============================================================================

fn section_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

fn render_summary(report: &AnalysisReport) {
    let mut table = section_table();
    table.set_header(vec!["Total Return %", "Annualized Return %"]);
    table.add_row(vec![
        report.summary.total_return_pct.to_string(),
        report.summary.annualized_return_pct.to_string(),
    ]);
    println!("\nPerformance Summary\n{table}");
}

fn render_annual_returns(report: &AnalysisReport, config: &Config) {
    let mut table = section_table();
    table.set_header(vec![
        "Year".to_string(),
        "Portfolio %".to_string(),
        format!("{} %", config.benchmarks.label(Benchmark::IndexA)),
        format!("{} %", config.benchmarks.label(Benchmark::IndexB)),
        format!("{} %", config.benchmarks.label(Benchmark::IndexC)),
    ]);
    for annual in &report.annual_returns {
        table.add_row(vec![
            annual.year.to_string(),
            annual.portfolio_pct.to_string(),
            annual.benchmark_a_pct.to_string(),
            annual.benchmark_b_pct.to_string(),
            annual.benchmark_c_pct.to_string(),
        ]);
    }
    println!("\nAnnual Returns\n{table}");
}

fn render_correlations(report: &AnalysisReport, config: &Config) {
    let mut table = section_table();
    table.set_header(vec!["Benchmark", "Correlation"]);
    for index in Benchmark::ALL {
        table.add_row(vec![
            config.benchmarks.label(index).to_string(),
            report.correlations.correlation(index).to_string(),
        ]);
    }
    println!("\nCorrelation vs Benchmarks\n{table}");
}

fn render_risk(report: &AnalysisReport) {
    let mut table = section_table();
    table.set_header(vec![
        "Volatility %",
        "Sharpe",
        "Max Drawdown %",
        "Downside Dev %",
        "Sortino",
    ]);
    table.add_row(vec![
        report.risk.volatility_pct.to_string(),
        report.risk.sharpe_ratio.to_string(),
        report.risk.max_drawdown_pct.to_string(),
        report.risk.downside_deviation_pct.to_string(),
        report.risk.sortino_ratio.to_string(),
    ]);
    println!("\nRisk Metrics\n{table}");
}

fn render_benchmarks(report: &AnalysisReport, config: &Config) {
    let mut table = section_table();
    table.set_header(vec![
        "Benchmark",
        "Portfolio %",
        "Benchmark %",
        "Alpha",
        "Beta",
        "Tracking Err %",
        "Active %",
        "Info Ratio",
    ]);
    for comparison in &report.benchmarks {
        table.add_row(vec![
            config.benchmarks.label(comparison.benchmark).to_string(),
            comparison.portfolio_return_pct.to_string(),
            comparison.benchmark_return_pct.to_string(),
            comparison.alpha.to_string(),
            comparison.beta.to_string(),
            comparison.tracking_error_pct.to_string(),
            comparison.active_return_pct.to_string(),
            comparison.information_ratio.to_string(),
        ]);
    }
    println!("\nBenchmark Comparison\n{table}");
}

fn render_drawdowns(report: &AnalysisReport) {
    let analysis = &report.drawdowns;

    let mut table = section_table();
    table.set_header(vec![
        "Start", "Trough", "Recovery", "Peak", "Low", "Depth %", "Days", "Recovery Days",
    ]);

    // Display order is by severity; the analysis itself stays chronological.
    let mut periods = analysis.periods.clone();
    periods.sort_by(|a, b| b.drawdown_pct.cmp(&a.drawdown_pct));

    for period in &periods {
        table.add_row(vec![
            period.start_date.to_string(),
            period.end_date.to_string(),
            period
                .recovery_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            period.peak_value.to_string(),
            period.trough_value.to_string(),
            period.drawdown_pct.to_string(),
            period.duration_days.to_string(),
            period
                .recovery_days
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("\nDrawdown History\n{table}");

    println!(
        "Average drawdown: {}%  Average recovery: {} days",
        analysis.average_drawdown_pct, analysis.average_recovery_days
    );
    match &analysis.current_drawdown {
        Some(open) => println!(
            "Currently {}% below the {} peak of {}",
            open.drawdown_pct, open.start_date, open.peak_value
        ),
        None => println!("No open drawdown."),
    }
}
