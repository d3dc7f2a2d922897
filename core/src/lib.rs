pub mod analyze;
pub mod cache;
pub mod errors;
pub mod metrics;
pub mod pace;
pub mod patterns;
pub mod series;
pub mod smoothing;
pub mod streaks;
pub mod trend;
pub mod types;

#[cfg(feature = "python")]
pub mod py;

pub use analyze::{analyze_series, analyze_series_with};
pub use errors::EngineError;
pub use pace::project_pace;
pub use smoothing::smooth;
pub use trend::fit;
pub use types::{
    DayOfWeekStat, Goal, PaceProjection, PaceStatus, PlateauInfo, Projection, Sample, StreakInfo,
    StreakKind, TrendCore, TrendReport,
};

use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;

// ──────────────────────────────────────────────────────────────────────
// JSON-grensen mot verten (web-UI / Python). Tolerant parsing med
// alias-felter og path-presise feilmeldinger via serde_path_to_error.
// ──────────────────────────────────────────────────────────────────────

/// Tolerant inngangsform for én måling fra verten.
#[derive(Debug, Deserialize)]
struct EntryIn {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "weight")]
    value: f64,
    #[serde(alias = "day")]
    date: String, // ISO 8601 kalenderdato, "YYYY-MM-DD"
    #[serde(default)]
    #[allow(dead_code)] // én enhet per kall; normalisering er vertens jobb
    unit: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoalIn {
    #[serde(alias = "targetValue")]
    target_value: f64,
    #[serde(alias = "targetDate")]
    target_date: String,
    #[serde(default = "default_unit")]
    unit: String,
    #[serde(default = "default_true", alias = "isActive")]
    is_active: bool,
}

fn default_unit() -> String {
    "kg".to_string()
}

fn default_true() -> bool {
    true
}

fn parse_date(s: &str, what: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        warn!("rejected {what} date {s:?}: {e}");
        EngineError::MalformedInput(format!("{what}: bad date {s:?} (expected YYYY-MM-DD)"))
    })
}

/// Parser vertens serie-JSON (liste av målinger) til `Sample`s.
/// Usortert input er OK (rutinene sorterer selv); duplikatdatoer
/// beholdes som separate målinger.
pub fn parse_series_json(series_json: &str) -> Result<Vec<Sample>, EngineError> {
    let mut de = serde_json::Deserializer::from_str(series_json);
    let entries: Vec<EntryIn> = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        warn!("rejected series json at {}: {}", e.path(), e);
        EngineError::MalformedInput(e.to_string())
    })?;

    let mut out = Vec::with_capacity(entries.len());
    for (i, e) in entries.into_iter().enumerate() {
        let date = parse_date(&e.date, &format!("entry[{i}]"))?;
        if !e.value.is_finite() {
            return Err(EngineError::InvalidParameter(format!(
                "entry[{i}]: non-finite value"
            )));
        }
        out.push(Sample {
            id: e.id.unwrap_or_else(|| i.to_string()),
            date,
            value: e.value,
            note: e.note,
        });
    }
    Ok(out)
}

fn parse_goal_json(goal_json: &str) -> Result<Goal, EngineError> {
    let mut de = serde_json::Deserializer::from_str(goal_json);
    let g: GoalIn = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        warn!("rejected goal json at {}: {}", e.path(), e);
        EngineError::MalformedInput(e.to_string())
    })?;
    Ok(Goal {
        target_value: g.target_value,
        target_date: parse_date(&g.target_date, "goal")?,
        unit: g.unit,
        is_active: g.is_active,
    })
}

fn to_json<T: serde::Serialize>(v: &T) -> Result<String, EngineError> {
    serde_json::to_string(v).map_err(|e| EngineError::MalformedInput(e.to_string()))
}

/// Full trendanalyse, JSON inn / JSON ut.
pub fn analyze_trend_json(series_json: &str) -> Result<String, EngineError> {
    let samples = parse_series_json(series_json)?;
    let report = analyze_series(&samples)?;
    to_json(&report)
}

/// Eksponentiell glatting, JSON inn / JSON-tallrekke ut.
pub fn smooth_json(series_json: &str, alpha: f64) -> Result<String, EngineError> {
    let samples = parse_series_json(series_json)?;
    let out = smooth(&samples, alpha)?;
    to_json(&out)
}

/// Mål-pace og ankomstprojeksjon. "Nåverdi" er seneste måling i serien;
/// `now_iso` er eksplisitt dato (motoren leser aldri klokke).
pub fn project_pace_json(
    series_json: &str,
    goal_json: &str,
    now_iso: &str,
) -> Result<String, EngineError> {
    let samples = parse_series_json(series_json)?;
    let goal = parse_goal_json(goal_json)?;
    let now = parse_date(now_iso, "now")?;

    if !goal.is_active {
        return Err(EngineError::InvalidParameter(
            "goal is not active".to_string(),
        ));
    }

    let sorted = series::sorted_by_date(&samples);
    let current = sorted.last().ok_or_else(|| {
        EngineError::InvalidParameter("pace projection needs at least one sample".to_string())
    })?;

    let core = trend::fit(&sorted);
    let projection = project_pace(&core, current.value, &goal, now);
    to_json(&projection)
}
