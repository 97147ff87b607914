//! iTunes podcast tags.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ITunesNamespace {
    pub author: Option<String>,
    pub block: Option<bool>,
    pub categories: Option<Vec<ITunesCategory>>,
    pub image: Option<ITunesImage>,
    pub duration: Option<Duration>,
    pub explicit: Option<bool>,
    pub complete: Option<bool>,
    pub new_feed_url: Option<String>,
    pub owner: Option<ITunesOwner>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub is_closed_captioned: Option<bool>,
    pub order: Option<i64>,
    /// `itunes:type`, `episodic` or `serial`.
    pub podcast_type: Option<String>,
    pub episode_type: Option<String>,
    pub season: Option<i64>,
    pub episode: Option<i64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ITunesCategory {
    pub text: Option<String>,
    pub subcategory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ITunesImage {
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ITunesOwner {
    pub name: Option<String>,
    pub email: Option<String>,
}
