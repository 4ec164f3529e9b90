//! Tests for pipeline job enumeration.

use super::*;

#[test]
fn default_config_enumerates_the_full_chart_set() {
    let jobs = chart_jobs(&Config::default());

    // Emissions: overall + (gas + 6 sectors) x 2 statistics = 15.
    // Per-capita: overall + gas + 6 sectors (no share variants) = 8.
    assert_eq!(jobs.len(), 23);
}

#[test]
fn per_capita_share_charts_are_skipped() {
    let jobs = chart_jobs(&Config::default());

    let per_capita_share = jobs.iter().any(|job| {
        job.metric == Metric::PerCapita
            && matches!(
                job.kind,
                ChartKind::ByGas(Statistic::Share) | ChartKind::BySector(_, Statistic::Share)
            )
    });
    assert!(!per_capita_share);
}

#[test]
fn save_dirs_split_by_metric() {
    let config = Config::default();
    let jobs = chart_jobs(&config);

    let emissions_job = jobs.iter().find(|j| j.metric == Metric::Emissions).unwrap();
    let per_capita_job = jobs.iter().find(|j| j.metric == Metric::PerCapita).unwrap();

    assert_eq!(
        emissions_job.save_dir(&config),
        PathBuf::from("results/emissions")
    );
    assert_eq!(
        per_capita_job.save_dir(&config),
        PathBuf::from("results/emissions_per_capita")
    );
}

#[test]
fn jobs_cover_every_configured_sector() {
    let config = Config::default();
    let jobs = chart_jobs(&config);

    for sector in &config.sectors {
        let count = jobs
            .iter()
            .filter(|j| matches!(&j.kind, ChartKind::BySector(s, _) if s.name == sector.name))
            .count();
        // Two statistics for emissions, one for per-capita.
        assert_eq!(count, 3, "sector {}", sector.name);
    }
}

#[test]
fn missing_workbook_aborts_the_run() {
    let mut config = Config::default();
    config.paths.data_dir = PathBuf::from("/nonexistent");
    config.paths.results_dir = std::env::temp_dir().join("ghg-charts-test-never-created");

    let err = run(&config, true).unwrap_err();
    assert!(matches!(err, EmissionsError::Workbook { .. }));
}
