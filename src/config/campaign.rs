//! Campaign configuration: start date, gate, and per-day settings

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::progression::TOTAL_DAYS;

/// One challenge day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConfig {
    /// Label shown on the dashboard card
    pub title: String,

    /// Show a celebration interstitial before the day is recorded as complete
    #[serde(default)]
    pub celebration: bool,
}

impl DayConfig {
    fn new(title: &str, celebration: bool) -> Self {
        Self {
            title: title.to_string(),
            celebration,
        }
    }
}

/// Campaign settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSettings {
    /// Calendar date on which day 1 opens (local midnight)
    #[serde(
        default = "default_start_date",
        deserialize_with = "deserialize_start_date"
    )]
    pub start_date: NaiveDate,

    /// Show the "are you ready?" gate until it has been acknowledged.
    /// When false the dashboard is shown straight away.
    #[serde(default = "default_ready_gate")]
    pub ready_gate: bool,

    /// Exactly one entry per day, in order
    #[serde(default = "default_days")]
    pub days: Vec<DayConfig>,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 9).unwrap_or_default()
}

/// Accept both `start_date = "2026-02-09"` and a bare TOML date
fn deserialize_start_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("invalid start_date {:?}: {}", text, e))),
        toml::Value::Datetime(datetime) => {
            let Some(date) = datetime.date else {
                return Err(D::Error::custom("start_date must include a date"));
            };
            if datetime.time.is_some() {
                return Err(D::Error::custom(format!(
                    "start_date must be a plain date, found {}",
                    datetime
                )));
            }
            NaiveDate::from_ymd_opt(i32::from(date.year), u32::from(date.month), u32::from(date.day))
                .ok_or_else(|| D::Error::custom(format!("invalid start_date {}", datetime)))
        }
        other => Err(D::Error::custom(format!(
            "start_date must be a date, found {}",
            other.type_str()
        ))),
    }
}

fn default_ready_gate() -> bool {
    true
}

fn default_days() -> Vec<DayConfig> {
    vec![
        DayConfig::new("Trivia Mastery", false),
        DayConfig::new("Memory Fragments", false),
        DayConfig::new("Nurture Core", true),
        DayConfig::new("Recall Matrix", false),
        DayConfig::new("Emote Capture", false),
        DayConfig::new("The Proposal", false),
    ]
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            ready_gate: default_ready_gate(),
            days: default_days(),
        }
    }
}

impl CampaignSettings {
    fn day(&self, day: u8) -> Option<&DayConfig> {
        let index = usize::from(day).checked_sub(1)?;
        self.days.get(index)
    }

    /// Dashboard title for `day`, or a generic label when not configured
    pub fn title(&self, day: u8) -> String {
        self.day(day)
            .map(|d| d.title.clone())
            .unwrap_or_else(|| format!("Day {}", day))
    }

    /// Whether completing `day` goes through the celebration interstitial
    pub fn requires_celebration(&self, day: u8) -> bool {
        self.day(day).is_some_and(|d| d.celebration)
    }

    /// Check the day list matches the fixed campaign length
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.days.len() != usize::from(TOTAL_DAYS) {
            anyhow::bail!(
                "campaign.days must have exactly {} entries, found {}",
                TOTAL_DAYS,
                self.days.len()
            );
        }
        if let Some(pos) = self.days.iter().position(|d| d.title.trim().is_empty()) {
            anyhow::bail!("campaign.days[{}] has an empty title", pos);
        }
        Ok(())
    }
}
