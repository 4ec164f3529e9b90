//! End-to-end chart pipeline: ingest, enrich, fan out chart jobs.

use std::fs;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::charts::{
    RenderedChart, Statistic, by_gas_chart, by_sector_chart, overall_chart,
};
use crate::config::{Config, SectorConfig};
use crate::error::{EmissionsError, Result};
use crate::ingest::read_workbook;
use crate::metrics::per_capita_table;
use crate::population::PopulationRegistry;
use crate::render::ChartProgress;
use crate::table::{EmissionsTable, Metric};

/// One chart to produce.
#[derive(Debug, Clone)]
pub struct ChartJob {
    pub metric: Metric,
    pub kind: ChartKind,
}

#[derive(Debug, Clone)]
pub enum ChartKind {
    Overall,
    ByGas(Statistic),
    BySector(SectorConfig, Statistic),
}

impl ChartJob {
    /// Build and render this job's chart from an enriched table.
    ///
    /// # Errors
    /// Propagates layout and palette errors from the chart builders.
    pub fn build(&self, table: &EmissionsTable, config: &Config) -> Result<RenderedChart> {
        match &self.kind {
            ChartKind::Overall => overall_chart(table, config, self.metric),
            ChartKind::ByGas(statistic) => by_gas_chart(table, config, self.metric, *statistic),
            ChartKind::BySector(sector, statistic) => {
                by_sector_chart(table, config, self.metric, sector, *statistic)
            }
        }
    }

    /// Output directory for this job, under the results root.
    #[must_use]
    pub fn save_dir(&self, config: &Config) -> PathBuf {
        config.paths.results_dir.join(self.metric.dir_name())
    }
}

/// A chart that could not be produced; the rest of the run continues.
#[derive(Debug)]
pub struct ChartFailure {
    pub description: String,
    pub error: EmissionsError,
}

/// Outcome of a pipeline run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub failures: Vec<ChartFailure>,
}

impl RunSummary {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Enumerate every chart the configuration asks for, in the order the
/// results are reported.
#[must_use]
pub fn chart_jobs(config: &Config) -> Vec<ChartJob> {
    let mut jobs = Vec::new();

    for metric in [Metric::Emissions, Metric::PerCapita] {
        jobs.push(ChartJob {
            metric,
            kind: ChartKind::Overall,
        });

        for statistic in [Statistic::Total, Statistic::Share] {
            // Percentage shares of a per-capita figure restate the same
            // shares; the original pipeline skips them too.
            if statistic.is_share() && metric == Metric::PerCapita {
                continue;
            }

            jobs.push(ChartJob {
                metric,
                kind: ChartKind::ByGas(statistic),
            });

            for sector in &config.sectors {
                jobs.push(ChartJob {
                    metric,
                    kind: ChartKind::BySector(sector.clone(), statistic),
                });
            }
        }
    }

    jobs
}

/// Run the full pipeline: read the workbook, enrich the table, render
/// every chart.
///
/// Chart failures are isolated: a failing chart is reported in the
/// summary while the remaining charts still render. Ingest failures and
/// unusable output directories abort the run.
///
/// # Errors
/// Returns an error when the workbook cannot be read or an output
/// directory cannot be created.
pub fn run(config: &Config, quiet: bool) -> Result<RunSummary> {
    // 1. Ingest the workbook.
    let workbook_path = config.paths.data_dir.join(&config.input.file_name);
    let table = read_workbook(
        &workbook_path,
        &config.input.sheet_name,
        &config.input.emissions_column,
    )?;

    // 2. Enrich with per-capita values.
    let population = PopulationRegistry::default();
    let table = per_capita_table(
        table,
        &population,
        &config.countries.code_mappings,
        &config.countries.excludes,
    );

    // 3. Enumerate chart jobs and prepare output directories.
    let jobs = chart_jobs(config);
    for metric in [Metric::Emissions, Metric::PerCapita] {
        fs::create_dir_all(config.paths.results_dir.join(metric.dir_name()))?;
    }

    // 4. Render all charts; jobs are independent, so fan out.
    let progress = ChartProgress::new(jobs.len() as u64, quiet);
    let results: Vec<std::result::Result<PathBuf, ChartFailure>> = jobs
        .par_iter()
        .map(|job| {
            let outcome = render_job(job, &table, config);
            progress.inc();
            outcome
        })
        .collect();
    progress.finish();

    // 5. Summarize.
    let mut summary = RunSummary::default();
    for result in results {
        match result {
            Ok(path) => summary.written.push(path),
            Err(failure) => summary.failures.push(failure),
        }
    }
    Ok(summary)
}

fn render_job(
    job: &ChartJob,
    table: &EmissionsTable,
    config: &Config,
) -> std::result::Result<PathBuf, ChartFailure> {
    let chart = job
        .build(table, config)
        .map_err(|error| ChartFailure {
            description: job_description(job),
            error,
        })?;

    let path = job.save_dir(config).join(&chart.file_name);
    fs::write(&path, &chart.svg).map_err(|source| ChartFailure {
        description: job_description(job),
        error: EmissionsError::Io(source),
    })?;

    Ok(path)
}

fn job_description(job: &ChartJob) -> String {
    let metric = job.metric.file_stem();
    match &job.kind {
        ChartKind::Overall => format!("{metric} overall"),
        ChartKind::ByGas(Statistic::Total) => format!("{metric} by gas"),
        ChartKind::ByGas(Statistic::Share) => format!("{metric} by gas (share)"),
        ChartKind::BySector(sector, Statistic::Total) => {
            format!("{metric} by sector '{}'", sector.name)
        }
        ChartKind::BySector(sector, Statistic::Share) => {
            format!("{metric} by sector '{}' (share)", sector.name)
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
