use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use iceberg_nav::config::{CliOverrides, FileConfig, Settings};
use iceberg_nav::graph::shortest_route;
use iceberg_nav::io::{OutputFormat, read_problem_file, write_route_file};

/// Navigate a ship through the Northern Ocean without hitting icebergs
///
/// The input file holds the number of icebergs, one line of `x,y` vertices
/// per iceberg, then the start and end points. The output file receives the
/// shortest safe route as space separated `x,y` points.
///
/// Examples:
///   # Solve a problem file
///   iceberg problem.txt route.txt
///
///   # JSON output, evaluating waypoint pairs on all cores
///   iceberg problem.txt route.json --format json --parallel
///
///   # Refuse non-convex or degenerate icebergs
///   iceberg problem.txt route.txt --strict
#[derive(Parser, Debug)]
#[command(name = "iceberg")]
#[command(version, about, long_about = None)]
struct Args {
    /// Problem description file
    input: PathBuf,

    /// File to write the route to
    output: PathBuf,

    /// Path to config file (optional, auto-searches iceberg.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Evaluate waypoint pairs in parallel
    #[arg(long)]
    parallel: bool,

    /// Reject icebergs that are not proper convex polygons
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref path) => Some(FileConfig::from_path(path)?),
        None => FileConfig::load(),
    };

    let cli = CliOverrides {
        parallel: args.parallel,
        strict: args.strict,
        verbose: args.verbose,
        format: args.format,
    };
    let settings = Settings::resolve(cli, file_config.as_ref());

    init_tracing(settings.verbose);

    if settings.verbose {
        println!("Configuration:");
        println!("  Input: {}", args.input.display());
        println!("  Output: {}", args.output.display());
        println!("  Format: {:?}", settings.format);
        println!("  Parallel: {}", settings.parallel);
        println!("  Strict: {}", settings.strict);
        println!();
    }

    let spinner = create_spinner("Reading problem...");
    let start = Instant::now();
    let problem = read_problem_file(&args.input)?;
    spinner.finish_with_message(format!(
        "Read {} icebergs [{:.1}s]",
        problem.obstacles.len(),
        start.elapsed().as_secs_f32()
    ));

    problem
        .validate(settings.strict)
        .context("Invalid problem")?;

    let spinner = create_spinner("Building visibility graph...");
    let start = Instant::now();
    let graph = problem.visibility_graph(settings.parallel);
    spinner.finish_with_message(format!(
        "Built graph: {} waypoints, {} navigable segments [{:.1}s]",
        graph.node_count(),
        graph.edge_count(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Searching shortest route...");
    let start = Instant::now();
    let route = shortest_route(&graph, problem.start, problem.end)
        .context("Failed to find a route")?;
    spinner.finish_with_message(format!(
        "Found route through {} waypoints, length {:.3} [{:.1}s]",
        route.points().len(),
        route.length(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Writing route...");
    let start = Instant::now();
    write_route_file(&args.output, &route, settings.format)?;
    spinner.finish_with_message(format!(
        "Wrote {} [{:.1}s]",
        args.output.display(),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!("Output: {}", args.output.display());

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
