use crate::errors::EngineError;
use crate::types::Sample;

/// Stabil kopi-sortering på dato, stigende. Duplikatdatoer beholder
/// innsettingsrekkefølgen og slås ALDRI sammen. Kallerens slice røres ikke.
pub fn sorted_by_date(samples: &[Sample]) -> Vec<Sample> {
    let mut out = samples.to_vec();
    out.sort_by_key(|s| s.date);
    out
}

/// x-akse for regresjon: hele dager siden tidligste dato (ikke indeks),
/// så ujevnt fordelte målinger håndteres riktig. Forutsetter sortert input.
pub fn day_offsets(sorted: &[Sample]) -> Vec<f64> {
    let first = match sorted.first() {
        Some(s) => s.date,
        None => return Vec::new(),
    };
    sorted
        .iter()
        .map(|s| (s.date - first).num_days() as f64)
        .collect()
}

/// Ikke-finite verdier er en kaller-bug, ikke en tom-tilstand: avvis.
pub fn validate_values(samples: &[Sample]) -> Result<(), EngineError> {
    for s in samples {
        if !s.value.is_finite() {
            return Err(EngineError::InvalidParameter(format!(
                "non-finite value {} in sample {}",
                s.value, s.id
            )));
        }
    }
    Ok(())
}

/// Verdiene i kronologisk rekkefølge.
pub fn values_of(sorted: &[Sample]) -> Vec<f64> {
    sorted.iter().map(|s| s.value).collect()
}
