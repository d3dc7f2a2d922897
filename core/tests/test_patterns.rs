use chrono::{NaiveDate, Weekday};
use trendgraph_core::patterns::{
    acceleration, day_of_week_averages, moving_average, volatility,
};
use trendgraph_core::types::Sample;

fn on(date: &str, value: f64) -> Sample {
    Sample::new("x", NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(), value)
}

fn daily(start_day: u32, values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Sample::new(
                i.to_string(),
                NaiveDate::from_ymd_opt(2024, 3, start_day + i as u32).unwrap(),
                v,
            )
        })
        .collect()
}

#[test]
fn volatility_matches_closed_form() {
    // Diffs [2, -3, 2]: snitt 1/3, populasjonsvarians 50/9
    let vol = volatility(&[100.0, 102.0, 99.0, 101.0]);
    let expected = (50.0f64 / 9.0).sqrt(); // ≈ 2.3570
    assert!((vol - expected).abs() < 1e-9);
    assert!((vol - 2.3570).abs() < 1e-3);
}

#[test]
fn volatility_needs_two_samples() {
    assert_eq!(volatility(&[]), 0.0);
    assert_eq!(volatility(&[80.0]), 0.0);
}

#[test]
fn volatility_zero_for_constant_series() {
    assert_eq!(volatility(&[70.0, 70.0, 70.0]), 0.0);
}

#[test]
fn acceleration_is_second_half_slope_minus_first() {
    // Første halvdel flat (slope 0), andre halvdel -1/dag → acc = -1
    let s = daily(1, &[70.0, 70.0, 70.0, 69.0, 68.0, 67.0]);
    assert!((acceleration(&s) - (-1.0)).abs() < 1e-9);

    // Jevn linje → ingen akselerasjon
    let s = daily(1, &[70.0, 69.0, 68.0, 67.0, 66.0, 65.0]);
    assert!(acceleration(&s).abs() < 1e-9);
}

#[test]
fn acceleration_needs_four_samples() {
    let s = daily(1, &[70.0, 71.0, 69.0]);
    assert_eq!(acceleration(&s), 0.0);
}

#[test]
fn moving_average_trailing_window_at_start() {
    // Vindu kortere enn k i starten: [1], [1,2], [1,2,3]
    assert_eq!(moving_average(&[1.0, 2.0, 3.0], 7), vec![1.0, 1.5, 2.0]);
}

#[test]
fn moving_average_full_window() {
    let out = moving_average(&[2.0, 4.0, 6.0, 8.0], 2);
    assert_eq!(out, vec![2.0, 3.0, 5.0, 7.0]);
}

#[test]
fn moving_average_is_causal() {
    // Siste element skal kun avhenge av de k siste verdiene
    let out = moving_average(&[100.0, 1.0, 2.0, 3.0], 3);
    assert!((out[3] - 2.0).abs() < 1e-12);
}

#[test]
fn day_of_week_buckets_and_counts() {
    // 2024-03-04 er en mandag
    let s = vec![
        on("2024-03-04", 80.0), // man
        on("2024-03-11", 82.0), // man
        on("2024-03-05", 79.0), // tir
    ];

    let stats = day_of_week_averages(&s);
    assert_eq!(stats.len(), 7);
    // Søn–Lør-rekkefølge
    assert_eq!(stats[0].weekday, Weekday::Sun);
    assert_eq!(stats[6].weekday, Weekday::Sat);

    let mon = stats.iter().find(|s| s.weekday == Weekday::Mon).unwrap();
    assert_eq!(mon.count, 2);
    assert!((mon.avg - 81.0).abs() < 1e-12);

    let tue = stats.iter().find(|s| s.weekday == Weekday::Tue).unwrap();
    assert_eq!(tue.count, 1);
    assert!((tue.avg - 79.0).abs() < 1e-12);

    // Tomme dager: avg 0.0 er sentinel, count skiller den fra ekte snitt
    let sun = &stats[0];
    assert_eq!(sun.count, 0);
    assert_eq!(sun.avg, 0.0);
}
