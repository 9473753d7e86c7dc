use clap::{Parser, Subcommand};
use flakebench::{run_cases, Catalog, Outcome, TestCase};
use tracing::info;

#[derive(Parser)]
#[command(name = "flakebench")]
#[command(about = "Drive the sample flaky/timing test-case catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog's suites and cases
    List {
        /// Only cases from this suite
        #[arg(short, long)]
        suite: Option<String>,
        /// Emit the case list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run cases sequentially; exits non-zero if any case fails
    Run {
        /// Only cases whose full name contains this substring
        #[arg(short, long)]
        filter: Option<String>,
        /// Emit per-case reports as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::sample();

    match cli.command {
        Commands::List { suite, json } => {
            list_cases(&catalog, suite.as_deref(), json)?;
        }
        Commands::Run { filter, json } => {
            let failures = run(&catalog, filter.as_deref(), json)?;
            if failures > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn select<'a>(catalog: &'a Catalog, filter: Option<&str>) -> Vec<&'a TestCase> {
    match filter {
        Some(f) => catalog
            .cases()
            .iter()
            .filter(|c| c.suite() == f || c.full_name().contains(f))
            .collect(),
        None => catalog.cases().iter().collect(),
    }
}

fn list_cases(
    catalog: &Catalog,
    suite: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let infos: Vec<_> = select(catalog, suite).iter().map(|c| c.info()).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for label in catalog.suites() {
        if suite.is_some_and(|s| s != label) {
            continue;
        }
        println!("{}", label);
        for case in catalog.suite(label) {
            println!("  {} ({} ms)", case.name(), case.delay().as_millis());
        }
    }

    Ok(())
}

fn run(
    catalog: &Catalog,
    filter: Option<&str>,
    json: bool,
) -> Result<usize, Box<dyn std::error::Error>> {
    let cases = select(catalog, filter);
    if cases.is_empty() {
        println!("No cases match the filter.");
        return Ok(0);
    }

    info!("Running {} case(s)", cases.len());
    let reports = run_cases(cases);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    let mut failures = 0;
    for report in &reports {
        match &report.outcome {
            Outcome::Passed => {}
            Outcome::Failed { message } => {
                failures += 1;
                println!("✗ {}: {}", report.full_name, message);
            }
        }
    }

    println!(
        "{} passed, {} failed ({} total)",
        reports.len() - failures,
        failures,
        reports.len()
    );

    Ok(failures)
}
