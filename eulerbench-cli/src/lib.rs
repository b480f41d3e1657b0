#![warn(missing_docs)]
//! EulerBench CLI Library
//!
//! This module provides the `euler` command line: listing implemented
//! problems, running their versions and timing them.
//! Use `eulerbench::run()` (or `eulerbench_cli::run()`) in your main function once
//! the crates holding your `#[problem]` / `#[version]` registrations are linked.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     eulerbench_solutions::link();
//!     eulerbench_cli::run()
//! }
//! ```

mod config;
mod executor;
mod planner;
#[cfg(test)]
mod tests_support;

pub use config::*;
pub use executor::{
    BenchOutcome, DispatchError, Dispatcher, INCOMPLETE_WARNING, LISTING_HEADER, ReportContext,
    RunOutcome, SCHEMA_VERSION, build_listing, build_perf_report, build_report_meta,
    build_run_report, compute_statistics, format_human_output, format_listing,
    version_display_name,
};
pub use planner::{VersionPlan, plan_versions};

use anyhow::Context;
use clap::{Parser, Subcommand};
use eulerbench_core::{
    Catalog, CatalogStore, DirectoryStore, ProblemArgs, ProblemDescriptor, ProblemId,
    ProblemResolver, ResourceBundle, SolutionStore, parse_range,
};
use eulerbench_report::{
    OutputFormat, Report, ReportConfig, generate_json_listing, generate_json_report,
};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// EulerBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "euler")]
#[command(author, version, about = "EulerBench - run and time Project Euler solutions")]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: human, json (defaults to euler.toml, then human)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Only print errors and results
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file (discovered from the current directory if not specified)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Discover problems from this directory instead of the compiled-in catalog
    #[arg(long, global = true)]
    pub solutions_dir: Option<PathBuf>,

    /// Directory holding problemNNN.txt resource files
    #[arg(long, global = true)]
    pub resources_dir: Option<PathBuf>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List implemented problems
    Info {
        /// Problems to list, e.g. `1..10,12` (all implemented if not specified)
        #[arg(short, long)]
        problems: Option<String>,

        /// Also list each problem's versions
        #[arg(short, long)]
        verbose: bool,
    },
    /// Run versions of a problem once and print their answers
    Run {
        /// Problem number
        #[arg(short, long)]
        problem: ProblemId,

        /// Versions to run, e.g. `1..3,5` (all if not specified)
        #[arg(short, long)]
        versions: Option<String>,

        /// Problem arguments, after `--` (e.g. `-- --number 1000`)
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Time versions of a problem over several iterations
    Perf {
        /// Problem number
        #[arg(short, long)]
        problem: ProblemId,

        /// Iterations per version (defaults to euler.toml, then 3)
        #[arg(short, long)]
        count: Option<usize>,

        /// Versions to time, e.g. `1..3,5` (all if not specified)
        #[arg(short, long)]
        versions: Option<String>,

        /// Problem arguments, after `--` (e.g. `-- --number 1000`)
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Print a default euler.toml
    Config,
}

/// Run the EulerBench CLI with the process arguments.
/// This is the main entry point of the `euler` binary.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the EulerBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(&cli);

    // Explicit --config must load; a discovered file that fails to parse is skipped
    let config = match &cli.config {
        Some(path) => EulerConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => EulerConfig::discover().unwrap_or_default(),
    };

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)?;

    let naming = config.naming.scheme();
    let catalog = Catalog::from_inventory();
    let store: Box<dyn SolutionStore> = match cli.solutions_dir.clone().or(config.solutions_dir()) {
        Some(dir) => Box::new(DirectoryStore::new(dir)),
        None => Box::new(CatalogStore::new(&catalog, &naming)),
    };
    tracing::debug!(store = %store.describe(), "solution store selected");

    let session = Session {
        cli: &cli,
        config: &config,
        format,
        resolver: ProblemResolver::new(&catalog, store.as_ref(), naming),
    };

    let output = match &cli.command {
        Commands::Info { problems, verbose } => session.info(problems.as_deref(), *verbose)?,
        Commands::Run {
            problem,
            versions,
            args,
        } => session.run(*problem, versions.as_deref(), args)?,
        Commands::Perf {
            problem,
            count,
            versions,
            args,
        } => session.perf(*problem, *count, versions.as_deref(), args)?,
        Commands::Config => EulerConfig::default_toml(),
    };

    write_output(&cli, &output)
}

/// Initialize logging on stderr; `RUST_LOG` overrides the flags
fn init_logging(cli: &Cli) {
    let default = if cli.debug {
        "eulerbench=debug"
    } else if cli.quiet {
        "eulerbench=warn"
    } else {
        "eulerbench=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Already initialized when called more than once in a process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn write_output(cli: &Cli, output: &str) -> anyhow::Result<()> {
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        tracing::info!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Everything a command needs, resolved once per invocation
struct Session<'a> {
    cli: &'a Cli,
    config: &'a EulerConfig,
    format: OutputFormat,
    resolver: ProblemResolver<'a>,
}

/// A problem ready to dispatch
struct Prepared {
    problem: ProblemDescriptor,
    args: ProblemArgs,
    plan: VersionPlan,
    resources: Option<ResourceBundle>,
}

impl Session<'_> {
    fn info(&self, problems: Option<&str>, verbose: bool) -> anyhow::Result<String> {
        let ids = match problems {
            Some(expression) => parse_range(expression)?,
            None => self.resolver.implemented_problems()?,
        };
        let listing = build_listing(&self.resolver, &ids, verbose, self.config.output.name_width)?;

        Ok(match self.format {
            OutputFormat::Json => generate_json_listing(&listing)?,
            OutputFormat::Human => format_listing(&listing),
        })
    }

    fn run(&self, id: ProblemId, versions: Option<&str>, raw: &[String]) -> anyhow::Result<String> {
        let prepared = self.prepare(id, versions, raw)?;
        let naming = self.resolver.naming();
        let dispatcher = Dispatcher::new(
            self.resolver.catalog(),
            &prepared.problem,
            &prepared.args,
            prepared.resources.as_ref(),
            &naming.versions,
        );

        let start = Instant::now();
        let outcomes = dispatcher.run(&prepared.plan)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let ctx = self.context(&prepared, None);
        self.render(&build_run_report(ctx, &outcomes, elapsed_ms))
    }

    fn perf(
        &self,
        id: ProblemId,
        count: Option<usize>,
        versions: Option<&str>,
        raw: &[String],
    ) -> anyhow::Result<String> {
        let requested = count.unwrap_or(self.config.runner.count);
        if requested == 0 {
            tracing::warn!("iteration count must be at least 1, using 1");
        }
        let iterations = requested.max(1);

        let prepared = self.prepare(id, versions, raw)?;
        let naming = self.resolver.naming();
        let dispatcher = Dispatcher::new(
            self.resolver.catalog(),
            &prepared.problem,
            &prepared.args,
            prepared.resources.as_ref(),
            &naming.versions,
        )
        .with_progress(!self.cli.quiet && std::io::stderr().is_terminal());

        let start = Instant::now();
        let outcomes = dispatcher.benchmark(&prepared.plan, iterations)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let stats = compute_statistics(&outcomes);
        let ctx = self.context(&prepared, Some(iterations));
        self.render(&build_perf_report(ctx, &outcomes, &stats, elapsed_ms))
    }

    /// Resolve the problem, its arguments, versions and resources; fails before anything runs
    fn prepare(
        &self,
        id: ProblemId,
        versions: Option<&str>,
        raw: &[String],
    ) -> anyhow::Result<Prepared> {
        let problem = self.resolver.resolve(id)?;
        let args = ProblemArgs::parse(problem.params(), raw)
            .with_context(|| format!("invalid arguments for problem {}", problem.number()))?;
        let plan = plan_versions(&problem, versions)?;

        let resources_dir = match &self.cli.resources_dir {
            Some(dir) => dir.clone(),
            None => self.config.resources_dir(),
        };
        let unit = self.resolver.naming().problems.label(id);
        let resources = ResourceBundle::load(&resources_dir, &unit)?;

        Ok(Prepared {
            problem,
            args,
            plan,
            resources,
        })
    }

    fn context<'p>(&'p self, prepared: &'p Prepared, iterations: Option<usize>) -> ReportContext<'p> {
        ReportContext {
            catalog: self.resolver.catalog(),
            problem: &prepared.problem,
            versions: &self.resolver.naming().versions,
            config: ReportConfig {
                selector: prepared.plan.selector.clone(),
                iterations,
                args: prepared
                    .args
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
        }
    }

    fn render(&self, report: &Report) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Json => generate_json_report(report)?,
            OutputFormat::Human => format_human_output(report),
        })
    }
}
