use chrono::NaiveDate;
use trendgraph_core::trend::fit;
use trendgraph_core::types::Sample;

fn on(date: &str, value: f64) -> Sample {
    Sample::new("x", NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(), value)
}

#[test]
fn perfect_line_fits_exactly() {
    // Dag 0..3, 1 kg ned per dag
    let s = vec![
        on("2024-02-01", 70.0),
        on("2024-02-02", 69.0),
        on("2024-02-03", 68.0),
        on("2024-02-04", 67.0),
    ];

    let core = fit(&s);
    assert!((core.slope - (-1.0)).abs() < 1e-12);
    assert!((core.intercept - 70.0).abs() < 1e-12);
    assert!((core.r_squared - 1.0).abs() < 1e-12);
    assert!((core.weekly_change() - (-7.0)).abs() < 1e-12);
    assert!((core.monthly_change() - (-30.0)).abs() < 1e-12);
}

#[test]
fn x_axis_is_days_not_index() {
    // Hull i datoene: dag 0, 1, 10. Indeks-basert fit ville gitt en
    // annen slope enn dag-basert.
    let s = vec![
        on("2024-02-01", 70.0),
        on("2024-02-02", 69.0),
        on("2024-02-11", 60.0),
    ];

    let core = fit(&s);
    assert!((core.slope - (-1.0)).abs() < 1e-9);
    assert!((core.r_squared - 1.0).abs() < 1e-9);
}

#[test]
fn sparse_series_returns_zero_sentinel() {
    let core = fit(&[]);
    assert_eq!((core.slope, core.intercept, core.r_squared), (0.0, 0.0, 0.0));

    let core = fit(&[on("2024-02-01", 70.0)]);
    assert_eq!((core.slope, core.intercept, core.r_squared), (0.0, 0.0, 0.0));
}

#[test]
fn all_samples_same_day_is_degenerate() {
    // Nevneren i OLS blir 0 – skal gi sentinel, ikke divisjon på null
    let s = vec![
        on("2024-02-01", 70.0),
        on("2024-02-01", 71.0),
        on("2024-02-01", 69.5),
    ];

    let core = fit(&s);
    assert_eq!((core.slope, core.intercept, core.r_squared), (0.0, 0.0, 0.0));
}

#[test]
fn r_squared_never_negative() {
    // Duplikatdatoer med sprikende verdier gir et ustabilt fit der
    // SSres kan overstige SStot – R² skal klemmes til 0
    let s = vec![
        on("2024-02-01", 70.0),
        on("2024-02-01", 90.0),
        on("2024-02-02", 69.0),
        on("2024-02-02", 91.0),
        on("2024-02-03", 95.0),
    ];

    let core = fit(&s);
    assert!(core.r_squared >= 0.0);
    assert!(core.r_squared <= 1.0);
}

#[test]
fn unsorted_input_gives_same_fit() {
    let sorted = vec![
        on("2024-02-01", 70.0),
        on("2024-02-02", 69.2),
        on("2024-02-03", 68.9),
    ];
    let mut shuffled = sorted.clone();
    shuffled.swap(0, 2);

    let a = fit(&sorted);
    let b = fit(&shuffled);
    assert_eq!(a, b);
}

#[test]
fn constant_values_have_zero_r_squared() {
    // SStot = 0 → R² rapporteres som 0, ikke NaN
    let s = vec![
        on("2024-02-01", 70.0),
        on("2024-02-02", 70.0),
        on("2024-02-03", 70.0),
    ];

    let core = fit(&s);
    assert_eq!(core.slope, 0.0);
    assert_eq!(core.r_squared, 0.0);
    assert!((core.intercept - 70.0).abs() < 1e-12);
}
