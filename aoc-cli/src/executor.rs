//! Executor for running registered solvers against stored inputs

use crate::config::Config;
use crate::error::RunError;
use crate::inputs::InputStore;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Result from a single part execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, RunError>,
    /// Set once per day, on the first part run after parsing
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs solvers one day at a time, parts in order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Parts to run given the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file is absent
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Execute all work items, handing each part's result to `sink` in order
    pub fn execute(&self, mut sink: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            self.run_solver(&work, &mut sink);
        }
    }

    #[tracing::instrument(skip_all, fields(year = work.year, day = work.day))]
    fn run_solver(&self, work: &WorkItem, sink: &mut impl FnMut(SolverResult)) {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.get(year, day) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(error = %e, "skipping solver without input");
                let e = Arc::new(e);
                for part in work.parts.clone() {
                    sink(make_error_result(year, day, part, RunError::Input(e.clone())));
                }
                return;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                for part in work.parts.clone() {
                    sink(make_error_result(year, day, part, RunError::Solver(clone_error(&e))));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let result = match solver.solve(part) {
                Ok(solved) => SolverResult {
                    year,
                    day,
                    part,
                    solve_duration: solved.duration(),
                    answer: Ok(solved.answer),
                    parse_duration: parse_duration.take(),
                },
                Err(e) => SolverResult {
                    parse_duration: parse_duration.take(),
                    ..make_error_result(year, day, part, RunError::Solver(e.into()))
                },
            };
            sink(result);
        }
    }
}

/// Per-part copy of a day-level solver creation failure
fn clone_error(e: &SolverError) -> SolverError {
    match e {
        SolverError::ParseError(pe) => SolverError::ParseError(pe.clone()),
        SolverError::NotFound(year, day) => SolverError::NotFound(*year, *day),
        other => SolverError::ParseError(aoc_solver::ParseError::Other(other.to_string())),
    }
}

fn make_error_result(year: u16, day: u8, part: u8, error: RunError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Part 1 counts edges, part 2 fails on purpose
    struct EdgeCount;

    impl AocParser for EdgeCount {
        type SharedData<'a> = Vec<(&'a str, &'a str)>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| l.split_once("->").ok_or_else(|| ParseError::InvalidFormat(l.into())))
                .collect()
        }
    }

    impl Solver for EdgeCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn config(dir: &Path) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: dir.to_path_buf(),
            quiet: true,
        }
    }

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver::<EdgeCount>(2025, 11)
            .unwrap()
            .register_solver::<EdgeCount>(2025, 8)
            .unwrap()
            .register_solver::<EdgeCount>(2024, 3)
            .unwrap()
            .build()
    }

    fn write_input(dir: &Path, year: u16, day: u8, text: &str) {
        let store = InputStore::new(dir.to_path_buf());
        fs::create_dir_all(dir.join(year.to_string())).unwrap();
        fs::write(store.path(year, day), text).unwrap();
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(|r| results.push(r));
        results
    }

    #[test]
    fn test_work_items_respect_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        let all = Executor::new(registry(), &cfg).collect_work_items();
        let dates: Vec<_> = all.iter().map(|w| (w.year, w.day)).collect();
        assert_eq!(dates, vec![(2024, 3), (2025, 8), (2025, 11)]);
        assert!(all.iter().all(|w| w.parts == (1..=2)));

        cfg.year_filter = Some(2025);
        cfg.part_filter = Some(2);
        let filtered = Executor::new(registry(), &cfg).collect_work_items();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|w| w.year == 2025 && w.parts == (2..=2)));
    }

    #[test]
    fn test_part_filter_beyond_solver_parts_skips_day() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        cfg.day_filter = Some(8);
        let executor = Executor::new(registry(), &cfg);
        assert_eq!(executor.filter_parts(1), 1..=1);
        assert!(executor.filter_parts(0).is_empty());
        cfg.part_filter = Some(2);
        let executor = Executor::new(registry(), &cfg);
        assert!(executor.filter_parts(1).is_empty());
    }

    #[test]
    fn test_execute_reports_each_part() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 2025, 11, "svr->dac\ndac->out");
        let mut cfg = config(temp.path());
        cfg.day_filter = Some(11);
        let executor = Executor::new(registry(), &cfg);
        assert!(executor.missing_inputs(&executor.collect_work_items()).is_empty());

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].answer.as_deref().ok(), Some("2"));
        assert!(results[0].parse_duration.is_some());
        assert!(matches!(
            results[1].answer,
            Err(RunError::Solver(SolverError::SolveError(SolveError::PartNotImplemented(2))))
        ));
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_yields_error_per_part() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        cfg.year_filter = Some(2024);
        let executor = Executor::new(registry(), &cfg);
        assert_eq!(executor.missing_inputs(&executor.collect_work_items()), vec![(2024, 3)]);

        let results = run(&executor);
        assert_eq!(results.iter().map(|r| r.part).collect::<Vec<_>>(), vec![1, 2]);
        assert!(results.iter().all(|r| matches!(r.answer, Err(RunError::Input(_)))));
    }

    #[test]
    fn test_parse_error_yields_error_per_part() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 2025, 8, "not an edge");
        let mut cfg = config(temp.path());
        cfg.day_filter = Some(8);
        let results = run(&Executor::new(registry(), &cfg));
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(matches!(
                &r.answer,
                Err(RunError::Solver(SolverError::ParseError(ParseError::InvalidFormat(l))))
                    if l == "not an edge"
            ));
        }
    }
}
