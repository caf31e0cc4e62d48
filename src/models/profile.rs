use super::ErrorResult;
use serde::{Deserialize, Serialize};

/// `GET /profile`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub total_scans: u32,
    pub recycling_score: f64,
    pub co2_saved: f64,
    pub member_since: String,
    pub location: String,
    pub waste_breakdown: Vec<WasteBreakdownEntry>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WasteBreakdownEntry {
    #[serde(rename = "type")]
    pub waste_type: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    #[serde(rename = "type")]
    pub achievement_type: String,
    pub earned_at: String,
}

impl Achievement {
    /// Earned date as "Jan 5, 2025"; unparsable timestamps are shown verbatim
    pub fn earned_on(&self) -> String {
        let parsed = chrono::DateTime::parse_from_rfc3339(&self.earned_at)
            .map(|dt| dt.date_naive())
            .or_else(|_| {
                chrono::NaiveDateTime::parse_from_str(&self.earned_at, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|dt| dt.date())
            })
            .or_else(|_| chrono::NaiveDate::parse_from_str(&self.earned_at, "%Y-%m-%d"));

        match parsed {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => self.earned_at.clone(),
        }
    }
}

/// `GET /impact`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ImpactData {
    pub total_co2_saved_kg: f64,
    pub total_water_saved_liters: f64,
    pub total_energy_saved_kwh: f64,
    pub equivalents: ImpactEquivalents,
    pub environmental_rank: EnvironmentalRank,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ImpactEquivalents {
    pub trees_planted: f64,
    pub cars_off_road_days: f64,
    pub smartphones_charged: f64,
    pub miles_not_driven: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EnvironmentalRank {
    pub level: String,
    pub icon: String,
    /// CO2 kg needed for the next rank; `None` at the top rank
    pub next_level: Option<f64>,
}

/// What the profile screen shows after mount
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileView {
    /// No stored token, nothing was requested
    Unauthenticated,
    Loaded {
        profile: UserProfile,
        impact: ImpactData,
    },
    Failed(ErrorResult),
}
