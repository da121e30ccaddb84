//! Batch migration driver.
//!
//! Resolves the input paths into file tasks, runs them on a rayon pool and
//! reports every outcome. One file failing never stops the others.

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::MigrateConfig;
use crate::core::{FileTask, collect_tasks};
use crate::pipeline::{Outcome, ProcessError, process_file};
use crate::utils::plural_count;
use crate::{debug, log};

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub saved: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Tasks never started because of Ctrl+C.
    pub cancelled: usize,
}

impl Summary {
    fn record(&mut self, result: Option<&Result<Outcome, ProcessError>>) {
        match result {
            Some(Ok(Outcome::Saved)) => self.saved += 1,
            Some(Ok(Outcome::Unchanged)) => self.unchanged += 1,
            Some(Ok(Outcome::Skipped)) => self.skipped += 1,
            Some(Err(_)) => self.failed += 1,
            None => self.cancelled += 1,
        }
    }

    /// Files that reached the processor or failed to enumerate.
    pub fn processed(&self) -> usize {
        self.saved + self.unchanged + self.skipped + self.failed
    }

    fn line(&self, dry_run: bool) -> String {
        let saved = if dry_run { "would save" } else { "saved" };
        let mut line = format!(
            "{} processed, {} {saved}, {} unchanged",
            plural_count(self.processed(), "file"),
            self.saved,
            self.unchanged,
        );
        if self.failed > 0 {
            line.push_str(&format!(", {} failed", self.failed));
        }
        if self.cancelled > 0 {
            line.push_str(&format!(", {} cancelled", self.cancelled));
        }
        line
    }
}

/// Migrate every file reachable from `config.inputs`.
///
/// `is_cancelled` is polled before each file starts.
pub fn run(config: &MigrateConfig, is_cancelled: impl Fn() -> bool + Sync) -> Result<Summary> {
    let set = collect_tasks(&config.inputs, &config.extensions);
    let mut summary = Summary::default();

    for failure in &set.failures {
        log!("error"; "{}: {}", failure.path.display(), failure.message);
        summary.failed += 1;
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = config.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build().context("failed to create thread pool")?;

    let results: Vec<_> = pool.install(|| {
        set.tasks
            .par_iter()
            .map(|task| (!is_cancelled()).then(|| migrate_one(task, config)))
            .collect()
    });

    for result in &results {
        summary.record(result.as_ref());
    }

    log!("migrate"; "{}", summary.line(config.options.dry_run));
    Ok(summary)
}

fn migrate_one(task: &FileTask, config: &MigrateConfig) -> Result<Outcome, ProcessError> {
    let path = task.path.display();
    log!("process"; "{}", path);

    let result = process_file(&task.path, &task.extension, config.options);
    match &result {
        Ok(Outcome::Saved) if config.options.dry_run => log!("dry-run"; "would save {}", path),
        Ok(Outcome::Saved) => log!("save"; "{}", path),
        Ok(Outcome::Unchanged) => debug!("skip"; "{} (unchanged)", path),
        Ok(Outcome::Skipped) => debug!("skip"; "{} (no pipeline)", path),
        Err(err) => log!("error"; "{}: {}", path, err),
    }
    result
}
