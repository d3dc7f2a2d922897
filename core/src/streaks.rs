use crate::types::{PlateauInfo, StreakInfo, StreakKind};

/// Støyterskel for klassifisering av en enkelt-delta. Rå-enhet (samme
/// tall for kg, lbs og fettprosent) – bevart for kompatibilitet, se
/// DESIGN.md om per-metrikk parameterisering.
pub const STREAK_NOISE_THRESHOLD: f64 = 0.1;

/// Platå = (maks - min) under denne terskelen i siste 7-vindu. Samme
/// rå-enhet-forbehold som over.
pub const PLATEAU_RANGE_THRESHOLD: f64 = 1.0;

pub const PLATEAU_WINDOW: usize = 7;

fn classify(delta: f64) -> StreakKind {
    if delta > STREAK_NOISE_THRESHOLD {
        StreakKind::Gain
    } else if delta < -STREAK_NOISE_THRESHOLD {
        StreakKind::Loss
    } else {
        StreakKind::Stable
    }
}

/// Lengste løp av like klassifiserte overganger i kronologiske verdier.
/// Ved lik lengde vinner det SENESTE løpet (>= i sammenligningen), og
/// `is_current` er true når vinnerløpet når helt frem til siste måling.
/// < 2 verdier → {stable, 0, false}.
pub fn longest_streak(values: &[f64]) -> StreakInfo {
    if values.len() < 2 {
        return StreakInfo::none();
    }

    let kinds: Vec<StreakKind> = values.windows(2).map(|w| classify(w[1] - w[0])).collect();

    let mut best_kind = kinds[0];
    let mut best_len = 0usize;
    let mut best_end = 0usize; // indeks i kinds der vinnerløpet slutter

    let mut run_kind = kinds[0];
    let mut run_len = 0usize;

    for (i, &k) in kinds.iter().enumerate() {
        if k == run_kind {
            run_len += 1;
        } else {
            run_kind = k;
            run_len = 1;
        }
        // >= : senere løp slår tidligere ved lik lengde
        if run_len >= best_len {
            best_kind = run_kind;
            best_len = run_len;
            best_end = i;
        }
    }

    StreakInfo {
        kind: best_kind,
        length: best_len,
        is_current: best_end == kinds.len() - 1,
    }
}

/// Platåtest på de siste 7 kronologiske verdiene. Færre enn 7 → aldri
/// platå (ingen delvindu-evaluering). `days` er den faste konstanten 7
/// når platå, ikke en målt varighet.
pub fn plateau(values: &[f64]) -> PlateauInfo {
    if values.len() < PLATEAU_WINDOW {
        return PlateauInfo {
            in_plateau: false,
            days: 0,
        };
    }

    let window = &values[values.len() - PLATEAU_WINDOW..];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in window {
        min = min.min(v);
        max = max.max(v);
    }

    let in_plateau = (max - min) < PLATEAU_RANGE_THRESHOLD;
    PlateauInfo {
        in_plateau,
        days: if in_plateau { PLATEAU_WINDOW as u32 } else { 0 },
    }
}
