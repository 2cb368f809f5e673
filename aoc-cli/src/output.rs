//! Output formatting for solver results and path reports

use crate::executor::SolverResult;
use aoc_toolkit::Graph;
use aoc_toolkit::paths::{PathReport, RequiredSet};
use chrono::TimeDelta;
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            match &result.answer {
                Ok(answer) => println!("{answer}"),
                Err(e) => eprintln!("Error: {e}"),
            }
        } else {
            match format_result(result) {
                Ok(line) => println!("{line}"),
                Err(line) => eprintln!("{line}"),
            }
        }
    }

    /// Print solved/failed counts and accumulated timings
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {successes} solved, {failures} failed");
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// One result line; `Err` lines go to stderr
fn format_result(result: &SolverResult) -> Result<String, String> {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            Ok(format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            ))
        }
        Err(e) => Err(format!("{prefix}: Error - {e}")),
    }
}

/// Lines describing a path analysis, in print order
pub fn format_path_report(
    graph: &Graph,
    report: &PathReport,
    required: &RequiredSet,
    limit: usize,
) -> Vec<String> {
    let mut lines = vec![
        format!("Graph: {} nodes, {} edges", graph.len(), graph.edge_count()),
        format!("Strategy: {}", report.strategy),
    ];
    if let Some(total) = report.total_simple {
        lines.push(format!("Total simple paths: {total}"));
    }
    lines.push(format!(
        "Paths visiting [{}]: {}",
        required.names().join(", "),
        report.qualifying
    ));
    for path in &report.retained {
        lines.push(graph.path_names(path).join(","));
    }
    if limit > 0 && report.qualifying > report.retained.len() as u128 {
        lines.push(format!("...printed {} paths (limit).", report.retained.len()));
    }
    lines
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
