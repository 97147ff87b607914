use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// RSS 1.0 Syndication module: how often the publisher updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyndicationNamespace {
    pub update_period: Option<UpdatePeriod>,
    /// Updates per `update_period`.
    pub update_frequency: Option<i64>,
    pub update_base: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePeriod {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl UpdatePeriod {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}
