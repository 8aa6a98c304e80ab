//! Campaign driver: scheduled experiments over one evolving population.
//!
//! This is the collaborator boundary around the GA core. A campaign runs
//! an ordered schedule of generation budgets against a single engine.
//! The population carries over between experiments, so later entries
//! continue refining earlier results. Each experiment yields the best
//! organism and the wall-clock duration, appended to a comma-separated
//! log as one row.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ga::GaEngine;

/// The reference experiment schedule.
pub const STANDARD_SCHEDULE: [usize; 10] = [10, 20, 50, 100, 500, 1000, 2000, 3000, 4000, 5000];

/// Header row of the campaign log.
pub const CSV_HEADER: &str = "population_size,generations,max_fitness,efficiency_pct,elapsed_us";

/// Outcome of one scheduled experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Organisms per generation.
    pub population_size: usize,
    /// Generation budget of this experiment.
    pub generations: usize,
    /// Best fitness at the end of the experiment.
    pub max_fitness: f64,
    /// Best efficiency percentage at the end of the experiment.
    pub efficiency_pct: f64,
    /// Wall-clock duration (microseconds).
    pub elapsed_us: u128,
}

impl ExperimentRecord {
    /// Renders the record as one log row, field order per [`CSV_HEADER`].
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.population_size,
            self.generations,
            self.max_fitness,
            self.efficiency_pct,
            self.elapsed_us
        )
    }
}

/// Append-only campaign log.
pub struct CampaignLog {
    file: File,
}

impl CampaignLog {
    /// Creates (or truncates) the log file and writes the header row.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        writeln!(file, "{CSV_HEADER}")?;
        Ok(Self { file })
    }

    /// Opens an existing log for appending, without rewriting the header.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self { file })
    }

    /// Appends one record row and flushes it.
    pub fn append(&mut self, record: &ExperimentRecord) -> io::Result<()> {
        writeln!(self.file, "{}", record.csv_row())?;
        self.file.flush()
    }
}

/// Runs one generation budget and reports the outcome.
///
/// `None` only when the engine's population is empty after the run,
/// which a validated engine never produces.
fn run_experiment<R: Rng>(
    engine: &mut GaEngine,
    generations: usize,
    rng: &mut R,
) -> Option<ExperimentRecord> {
    let start = Instant::now();
    engine.run(generations, rng);
    let elapsed = start.elapsed();

    let best = engine.best()?;
    Some(ExperimentRecord {
        population_size: engine.config().population_size,
        generations,
        max_fitness: best.fitness,
        efficiency_pct: best.efficiency_pct,
        elapsed_us: elapsed.as_micros(),
    })
}

/// Runs a full schedule against one engine.
pub fn run_schedule<R: Rng>(
    engine: &mut GaEngine,
    schedule: &[usize],
    rng: &mut R,
) -> Vec<ExperimentRecord> {
    schedule
        .iter()
        .filter_map(|&generations| run_experiment(engine, generations, rng))
        .collect()
}

/// Runs a full schedule, appending one log row after each experiment.
pub fn run_logged<R: Rng>(
    engine: &mut GaEngine,
    schedule: &[usize],
    log: &mut CampaignLog,
    rng: &mut R,
) -> io::Result<Vec<ExperimentRecord>> {
    let mut records = Vec::with_capacity(schedule.len());
    for &generations in schedule {
        if let Some(record) = run_experiment(engine, generations, rng) {
            log.append(&record)?;
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GaConfig;
    use crate::models::Scenario;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn small_engine() -> GaEngine {
        let config = GaConfig::default().with_population_size(12);
        GaEngine::new(Scenario::standard(), config).unwrap()
    }

    fn temp_log_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("strike-optim-{}-{}.csv", tag, std::process::id()))
    }

    #[test]
    fn test_run_schedule_one_record_per_experiment() {
        let mut engine = small_engine();
        let mut rng = SmallRng::seed_from_u64(42);

        let records = run_schedule(&mut engine, &[2, 3, 5], &mut rng);

        assert_eq!(records.len(), 3);
        let budgets: Vec<usize> = records.iter().map(|r| r.generations).collect();
        assert_eq!(budgets, vec![2, 3, 5]);
        for r in &records {
            assert_eq!(r.population_size, 12);
        }
    }

    #[test]
    fn test_population_persists_across_experiments() {
        // Elitism over a persistent population: the best of a later
        // experiment never falls below the best of an earlier one.
        let mut engine = small_engine();
        let mut rng = SmallRng::seed_from_u64(42);

        let records = run_schedule(&mut engine, &[5, 5, 5, 5], &mut rng);
        for pair in records.windows(2) {
            assert!(pair[1].max_fitness >= pair[0].max_fitness);
        }
    }

    #[test]
    fn test_csv_row_shape() {
        let record = ExperimentRecord {
            population_size: 50,
            generations: 100,
            max_fitness: 186.0,
            efficiency_pct: 75.5,
            elapsed_us: 1234,
        };
        assert_eq!(record.csv_row(), "50,100,186,75.5,1234");
        assert_eq!(record.csv_row().split(',').count(), CSV_HEADER.split(',').count());
    }

    #[test]
    fn test_campaign_log_round_trip() {
        let path = temp_log_path("log-round-trip");
        let mut engine = small_engine();
        let mut rng = SmallRng::seed_from_u64(42);

        let mut log = CampaignLog::create(&path).unwrap();
        let records = run_logged(&mut engine, &[1, 2], &mut log, &mut rng).unwrap();
        drop(log);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 1 + records.len());
        assert_eq!(lines[1], records[0].csv_row());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_campaign_log_reopen_appends() {
        let path = temp_log_path("log-reopen");
        let record = ExperimentRecord {
            population_size: 10,
            generations: 1,
            max_fitness: 0.0,
            efficiency_pct: 0.0,
            elapsed_us: 1,
        };

        let mut log = CampaignLog::create(&path).unwrap();
        log.append(&record).unwrap();
        drop(log);

        let mut log = CampaignLog::open(&path).unwrap();
        log.append(&record).unwrap();
        drop(log);

        let contents = std::fs::read_to_string(&path).unwrap();
        // One header and two rows; reopening must not rewrite the header
        assert_eq!(contents.lines().count(), 3);
        assert_eq!(contents.lines().filter(|l| *l == CSV_HEADER).count(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_standard_schedule_values() {
        assert_eq!(STANDARD_SCHEDULE[0], 10);
        assert_eq!(STANDARD_SCHEDULE[9], 5000);
        assert!(STANDARD_SCHEDULE.windows(2).all(|w| w[0] < w[1]));
    }
}
