use chrono::{Datelike, Weekday};

use crate::series::{day_offsets, sorted_by_date};
use crate::trend::fit_xy;
use crate::types::{DayOfWeekStat, Sample};

/// Volatilitet = populasjons-standardavvik av førstedifferansene
/// (v[i] - v[i-1]) i kronologisk rekkefølge. < 2 punkter → 0.
pub fn volatility(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
    let var = diffs.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / diffs.len() as f64;
    var.sqrt()
}

/// Akselerasjon: del serien i to halvdeler (mid = n/2), OLS-slope per
/// halvdel på den globale dag-offset-aksen, returner differansen
/// slope(siste) - slope(første). < 4 punkter → 0.
pub fn acceleration(samples: &[Sample]) -> f64 {
    let sorted = sorted_by_date(samples);
    let n = sorted.len();
    if n < 4 {
        return 0.0;
    }

    let xs = day_offsets(&sorted);
    let ys: Vec<f64> = sorted.iter().map(|s| s.value).collect();

    let mid = n / 2;
    let first = fit_xy(&xs[..mid], &ys[..mid]);
    let second = fit_xy(&xs[mid..], &ys[mid..]);

    second.slope - first.slope
}

/// Trailing/kausalt glidende snitt: vindu = min(k, i+1) verdier t.o.m.
/// indeks i. Ingen sentrering, ingen look-ahead – definert også i
/// starten der vinduet er kortere enn k.
pub fn moving_average(values: &[f64], k: usize) -> Vec<f64> {
    if k == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0f64;

    for i in 0..values.len() {
        sum += values[i];
        if i >= k {
            sum -= values[i - k];
        }
        let window = k.min(i + 1);
        out.push(sum / window as f64);
    }

    out
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Snitt per ukedag (Søn–Lør). Tomme dager får avg=0.0 og count=0 –
/// count skiller "ingen data" fra et ekte 0-snitt.
pub fn day_of_week_averages(samples: &[Sample]) -> Vec<DayOfWeekStat> {
    let mut sums = [0.0f64; 7];
    let mut counts = [0usize; 7];

    for s in samples {
        let idx = s.date.weekday().num_days_from_sunday() as usize;
        sums[idx] += s.value;
        counts[idx] += 1;
    }

    WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, &weekday)| DayOfWeekStat {
            weekday,
            avg: if counts[i] > 0 {
                sums[i] / counts[i] as f64
            } else {
                0.0
            },
            count: counts[i],
        })
        .collect()
}
