//! `paths` subcommand: path analysis over a graph file

use crate::cli::PathsArgs;
use crate::error::{CliError, InputStoreError};
use crate::output::format_path_report;
use aoc_toolkit::load_graph;
use aoc_toolkit::paths::{PathQuery, RequiredSet, analyze_paths};
use std::fs;

/// Load the graph named in `args`, analyze it and print the report
///
/// In quiet mode only the qualifying path count is printed.
pub fn run(args: &PathsArgs, quiet: bool) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.input).map_err(|source| InputStoreError::Io {
        path: args.input.clone(),
        source,
    })?;
    for line in report_lines(&text, args, quiet)? {
        println!("{line}");
    }
    Ok(())
}

fn report_lines(text: &str, args: &PathsArgs, quiet: bool) -> Result<Vec<String>, CliError> {
    let graph = load_graph(text)?;
    let required = RequiredSet::new(
        args.required
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty()),
    )?;
    let retain = if quiet || args.no_print_paths { 0 } else { args.limit };

    let query = PathQuery::new(&args.start, &args.end)
        .required(required.clone())
        .retain(retain);
    let report = analyze_paths(&graph, &query)?;
    if quiet {
        return Ok(vec![report.qualifying.to_string()]);
    }
    Ok(format_path_report(&graph, &report, &required, retain))
}
