use crate::errors::EngineError;
use crate::series::sorted_by_date;
use crate::types::Sample;

/// Eksponentiell glatting (1. ordens IIR-lavpass) over en serie.
/// Sorterer selv (stabilt, på dato) så rekkefølgefeil hos kalleren
/// ikke gir orden-avhengige resultater.
///
/// out[0] = første verdi; out[i] = alpha*v[i] + (1-alpha)*out[i-1].
/// Tom serie → tom vektor. Alpha utenfor (0,1] avvises – ingen klemming.
pub fn smooth(samples: &[Sample], alpha: f64) -> Result<Vec<f64>, EngineError> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
        return Err(EngineError::InvalidParameter(format!(
            "alpha must be in (0, 1], got {alpha}"
        )));
    }

    let sorted = sorted_by_date(samples);
    let mut out = Vec::with_capacity(sorted.len());

    for s in &sorted {
        let next = match out.last().copied() {
            None => s.value,
            Some(prev) => alpha * s.value + (1.0 - alpha) * prev,
        };
        out.push(next);
    }

    Ok(out)
}
