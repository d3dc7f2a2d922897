use crate::series::{day_offsets, sorted_by_date};
use crate::types::{Sample, TrendCore};

/// OLS-fit over (dag-offset, verdi).
/// < 2 punkter, eller alle på samme dag (degenerert), gir null-trend-
/// sentinelen i stedet for feil – kalleren bruker antall punkter til å
/// avgjøre om resultatet kan stoles på.
pub fn fit(samples: &[Sample]) -> TrendCore {
    let sorted = sorted_by_date(samples);
    let xs = day_offsets(&sorted);
    let ys: Vec<f64> = sorted.iter().map(|s| s.value).collect();
    fit_xy(&xs, &ys)
}

/// Kjerneformelen, delt med patterns::acceleration (samme x-akse-definisjon).
pub(crate) fn fit_xy(xs: &[f64], ys: &[f64]) -> TrendCore {
    let n = xs.len();
    if n < 2 || ys.len() != n {
        return TrendCore::zero();
    }
    let nf = n as f64;

    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();

    // Nevneren er 0 kun når alle x er like (alle målinger samme dag).
    let denom = nf * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return TrendCore::zero();
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / nf;

    // R² = 1 - SSres/SStot, klemt til >= 0. Negativt R² fra et
    // degenerert fit rapporteres som 0 med vilje.
    let mean_y = sum_y / nf;
    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    let r_squared = if ss_tot > 0.0 {
        let ss_res: f64 = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| {
                let pred = slope * x + intercept;
                (y - pred).powi(2)
            })
            .sum();
        (1.0 - ss_res / ss_tot).max(0.0)
    } else {
        0.0
    };

    TrendCore {
        slope,
        intercept,
        r_squared,
    }
}
