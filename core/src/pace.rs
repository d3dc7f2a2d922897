use chrono::{Duration, NaiveDate};

use crate::types::{Goal, PaceProjection, PaceStatus, Projection, TrendCore};

/// Epsilon for ahead/behind-sammenligningen av |faktisk| mot |nødvendig|.
const PACE_EPSILON: f64 = 1e-3;

/// Vinduets halvbredde-andel klemmes til [0.1, 0.6]: selv et perfekt
/// fit får litt slingringsmonn, og et elendig fit blir ikke absurd bredt.
const BAND_FRACTION_MIN: f64 = 0.1;
const BAND_FRACTION_MAX: f64 = 0.6;

/// 100 år. Tak mot dato-overflow i chrono.
const MAX_PROJECTION_DAYS: f64 = 36_500.0;

/// Nødvendig vs faktisk ukentlig endring mot målet, pluss et
/// konfidensbåndet ankomstestimat. `now` er eksplisitt parameter –
/// motoren leser aldri klokke selv. Verdier antas ferdig
/// enhetsnormalisert av kalleren (mål og måling i samme enhet).
pub fn project_pace(
    trend: &TrendCore,
    current_value: f64,
    goal: &Goal,
    now: NaiveDate,
) -> PaceProjection {
    let delta_to_goal = goal.target_value - current_value;
    let direction = sign(delta_to_goal);

    let days_until_target = (goal.target_date - now).num_days() as f64;
    let weeks_until_target = days_until_target / 7.0;

    // 0 uker igjen → nødvendig pace udefinert, ingen divisjon på 0.
    let required_weekly_change = if weeks_until_target == 0.0 {
        None
    } else {
        Some(delta_to_goal / weeks_until_target)
    };

    let actual_weekly_change = trend.weekly_change();
    // Projiser faktisk trend på retningen målet krever.
    let actual_towards_goal = direction * actual_weekly_change;

    let wrong_direction =
        actual_towards_goal < 0.0 || (actual_weekly_change == 0.0 && direction != 0.0);

    let status = if wrong_direction {
        Some(PaceStatus::WrongDirection)
    } else {
        required_weekly_change.map(|required| {
            if actual_weekly_change.abs() >= required.abs() - PACE_EPSILON {
                PaceStatus::Ahead
            } else {
                PaceStatus::Behind
            }
        })
    };

    let pace_delta_per_week =
        required_weekly_change.map(|required| actual_weekly_change.abs() - required.abs());

    // Ankomstprojeksjon kun ved reell fremdrift mot målet.
    let projection = if actual_towards_goal > 0.0 {
        let days_to_goal = delta_to_goal.abs() / actual_towards_goal * 7.0;
        // Mikroskopisk fremdrift kan gi århundrer; utenfor taket er
        // estimatet uansett meningsløst for UI-et.
        if days_to_goal.is_finite() && days_to_goal <= MAX_PROJECTION_DAYS {
            let confidence = trend.r_squared.clamp(0.0, 1.0);
            let fraction = (1.0 - confidence).clamp(BAND_FRACTION_MIN, BAND_FRACTION_MAX);
            let half_width = days_to_goal * fraction;

            Some(Projection {
                earliest: add_days(now, days_to_goal - half_width),
                estimated: add_days(now, days_to_goal),
                latest: add_days(now, days_to_goal + half_width),
            })
        } else {
            None
        }
    } else {
        None
    };

    PaceProjection {
        required_weekly_change,
        actual_weekly_change,
        pace_delta_per_week,
        status,
        projection,
    }
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn add_days(date: NaiveDate, days: f64) -> NaiveDate {
    date + Duration::days(days.round() as i64)
}
