use log::debug;

use crate::errors::EngineError;
use crate::metrics::{analyze_total, sparse_series_total, Metrics, METRICS};
use crate::patterns::{acceleration, day_of_week_averages, moving_average, volatility};
use crate::series::{sorted_by_date, validate_values, values_of};
use crate::streaks::{longest_streak, plateau};
use crate::trend;
use crate::types::{Sample, TrendReport};

/// Full analyse av en serie: valider → normaliser (stabil sortering på
/// dato) → kjør regresjon, mønster- og streak-rutinene over samme
/// sorterte kopi. Tynne serier gir sentinel-felter, aldri feil – UI-et
/// skal alltid ha noe å rendre.
pub fn analyze_series(samples: &[Sample]) -> Result<TrendReport, EngineError> {
    analyze_series_with(samples, &METRICS)
}

/// Variant med eksplisitte tellere (test/scrape).
pub fn analyze_series_with(
    samples: &[Sample],
    metrics: &Metrics,
) -> Result<TrendReport, EngineError> {
    validate_values(samples)?;

    let sorted = sorted_by_date(samples);
    let values = values_of(&sorted);
    debug!("analyze_series: {} samples", sorted.len());

    if sorted.len() < 2 {
        sparse_series_total(metrics).inc();
    }

    let core = trend::fit(&sorted);

    let report = TrendReport {
        sample_count: sorted.len(),
        slope: core.slope,
        intercept: core.intercept,
        r_squared: core.r_squared,
        weekly_change: core.weekly_change(),
        monthly_change: core.monthly_change(),
        volatility: volatility(&values),
        acceleration: acceleration(&sorted),
        moving_average_7: moving_average(&values, 7),
        moving_average_30: moving_average(&values, 30),
        longest_streak: longest_streak(&values),
        plateau: plateau(&values),
        day_of_week: day_of_week_averages(&sorted),
    };

    analyze_total(metrics).inc();
    Ok(report)
}
