use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Dublin Core element set (`http://purl.org/dc/elements/1.1/`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DublinCoreNamespace {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    pub contributor: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub format: Option<String>,
    pub identifier: Option<String>,
    pub source: Option<String>,
    pub language: Option<String>,
    pub relation: Option<String>,
    pub coverage: Option<String>,
    pub rights: Option<String>,
}
