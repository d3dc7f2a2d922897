use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Én måling: vekt (kg/lbs) eller fettprosent. Én enhet per serie –
/// enhetskonvertering skjer hos kalleren, aldri her.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    pub date: NaiveDate,     // dagsoppløsning
    pub value: f64,          // kg, lbs eller %
    pub note: Option<String>,
}

impl Sample {
    pub fn new(id: impl Into<String>, date: NaiveDate, value: f64) -> Self {
        Self {
            id: id.into(),
            date,
            value,
            note: None,
        }
    }
}

/// Aktivt mål, levert utenfra. Motoren leser det kun.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub target_value: f64,
    pub target_date: NaiveDate,
    pub unit: String,
    pub is_active: bool,
}

/// Rå regresjonsresultat fra OLS-fit over (dag-offset, verdi).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TrendCore {
    pub slope: f64,     // enhet per dag
    pub intercept: f64,
    pub r_squared: f64, // [0,1] etter klemming
}

impl TrendCore {
    /// Null-trend-sentinel for < 2 punkter eller degenerert fit.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn weekly_change(&self) -> f64 {
        self.slope * 7.0
    }

    pub fn monthly_change(&self) -> f64 {
        self.slope * 30.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Loss,
    Gain,
    Stable,
}

/// Lengste sammenhengende løp av lik retning (gain/loss/stable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub kind: StreakKind,
    pub length: usize,
    pub is_current: bool,
}

impl StreakInfo {
    pub fn none() -> Self {
        Self {
            kind: StreakKind::Stable,
            length: 0,
            is_current: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateauInfo {
    pub in_plateau: bool,
    /// Fast 7 når platå, ellers 0. Grovt signal, ikke målt varighet.
    pub days: u32,
}

/// Snitt per ukedag. `avg` er 0.0 når `count == 0` (bakoverkompatibel
/// JSON) – sjekk `count` før 0.0 tolkes som ekte snitt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOfWeekStat {
    pub weekday: Weekday,
    pub avg: f64,
    pub count: usize,
}

/// Full analyse av en serie. Beregnes ferskt per kall, persisteres aldri.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    pub sample_count: usize,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub weekly_change: f64,
    pub monthly_change: f64,
    pub volatility: f64,
    pub acceleration: f64,
    pub moving_average_7: Vec<f64>,
    pub moving_average_30: Vec<f64>,
    pub longest_streak: StreakInfo,
    pub plateau: PlateauInfo,
    pub day_of_week: Vec<DayOfWeekStat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    Ahead,
    Behind,
    WrongDirection,
}

/// Ankomstvindu for målet. Bredden styres av regresjonens R².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub earliest: NaiveDate,
    pub estimated: NaiveDate,
    pub latest: NaiveDate,
}

/// Faktisk vs nødvendig ukentlig endring mot målet.
/// `required_weekly_change` er None når måldatoen er i dag (0 uker).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceProjection {
    pub required_weekly_change: Option<f64>,
    pub actual_weekly_change: f64,
    pub pace_delta_per_week: Option<f64>,
    pub status: Option<PaceStatus>,
    pub projection: Option<Projection>,
}
