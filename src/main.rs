use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use statement_report::engine::{ImportJob, ReportEngine};
use statement_report::storage::{ImportOutcome, ReportStorage, Storage};
use statement_report::Report;

const USAGE: &str = "Usage: statement-report [--json] [--log-level <level>] <statement.csv>...";

struct Arguments {
    json: bool,
    log_level: LevelFilter,
    paths: Vec<String>
}

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: The argument surface is small enough to parse by hand
    let arguments = match parse_arguments(std::env::args().skip(1)) {
        Some(arguments) if !arguments.paths.is_empty() => arguments,
        _ => {
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            exit(1);
        }
    };

    setup_logging(arguments.log_level);

    let storage = Arc::new(ReportStorage::new());
    let engine = ReportEngine::new(storage.clone());

    //NOTE: The path as given is the import id, it is unique per invocation and readable in the output
    let jobs = arguments.paths.iter()
        .map(|path| ImportJob::new(path.as_str(), path.as_str()))
        .collect();

    let timer = Instant::now();
    let completed = engine.run(jobs).await?;
    let duration = timer.elapsed();

    info!("Processed {} statements in: {duration:?}", arguments.paths.len());

    let outcomes: Vec<(String, ImportOutcome)> = arguments.paths.iter()
        .filter_map(|path| storage.load(path).map(|outcome| (path.clone(), outcome)))
        .collect();

    if arguments.json {
        write_json_to_stdout(&outcomes)?;
    } else {
        write_text_to_stdout(&outcomes)?;
    }

    if completed == 0 {
        exit(1);
    }

    Ok(())
}

fn parse_arguments(mut args: impl Iterator<Item = String>) -> Option<Arguments> {
    let mut arguments = Arguments {
        json: false,
        log_level: LevelFilter::ERROR,
        paths: Vec::new()
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => arguments.json = true,
            "--log-level" => arguments.log_level = parse_log_level(&args.next()?),
            "-h" | "--help" => return None,
            //NOTE: Paths are import ids, a repeated path is imported once
            _ if arguments.paths.contains(&arg) => {}
            _ => arguments.paths.push(arg)
        }
    }

    Some(arguments)
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Reports go to stdout, logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_json_to_stdout(outcomes: &[(String, ImportOutcome)]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());
    let outcomes: Vec<&ImportOutcome> = outcomes.iter().map(|(_, outcome)| outcome).collect();

    serde_json::to_writer_pretty(&mut output, &outcomes)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

fn write_text_to_stdout(outcomes: &[(String, ImportOutcome)]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for (path, outcome) in outcomes {
        writeln!(output, "== {path}")?;

        match outcome {
            ImportOutcome::Completed(report) => write_report(&mut output, report)?,
            ImportOutcome::Failed(error) => writeln!(output, "error: {error}")?
        }

        writeln!(output)?;
    }

    output.flush()?;

    Ok(())
}

fn write_report(output: &mut impl Write, report: &Report) -> Result<()> {
    let kpis = &report.kpis;

    writeln!(output, "transactions,{},skipped,{}", report.transaction_count, report.skipped_rows)?;
    writeln!(output, "total_income,{}", kpis.total_income)?;
    writeln!(output, "total_expense,{}", kpis.total_expense)?;
    writeln!(output, "net_balance,{}", kpis.net_balance)?;
    writeln!(output, "savings_rate,{:.2}", kpis.savings_rate)?;

    writeln!(output, "month,income,expense,net")?;

    for (month, totals) in &report.monthly {
        writeln!(output, "{},{},{},{}", month, totals.income, totals.expense, totals.net())?;
    }

    writeln!(output, "category,total,share")?;

    for entry in report.categories.iter() {
        writeln!(output, "{},{},{:.2}", entry.category, entry.total, report.categories.share(entry.category))?;
    }

    Ok(())
}
