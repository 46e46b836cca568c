pub mod reader;
pub mod writer;

pub use reader::{parse_point, read_problem};
pub use writer::{OutputFormat, write_route};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::route::{Problem, Route, SolveOptions};

/// Read a problem from a file
pub fn read_problem_file(path: &Path) -> Result<Problem> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    read_problem(BufReader::new(file))
        .with_context(|| format!("Failed to parse input file: {}", path.display()))
}

/// Write a route to a file, replacing any existing content
pub fn write_route_file(path: &Path, route: &Route, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_route(BufWriter::new(file), route, format)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// Solve the problem in `input` and write the route to `output`
pub fn solve_file(
    input: &Path,
    output: &Path,
    options: &SolveOptions,
    format: OutputFormat,
) -> Result<Route> {
    let problem = read_problem_file(input)?;
    let route = problem.solve(options).context("Failed to find a route")?;
    write_route_file(output, &route, format)?;
    Ok(route)
}
