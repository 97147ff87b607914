//! Media RSS (`http://search.yahoo.com/mrss/`).

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaNamespace {
    pub group: Option<MediaGroup>,
    pub contents: Option<Vec<MediaContent>>,
    pub credits: Option<Vec<MediaCredit>>,
    pub category: Option<MediaCategory>,
    pub rating: Option<MediaRating>,
    pub keywords: Option<Vec<String>>,
    pub thumbnails: Option<Vec<MediaThumbnail>>,
    pub title: Option<MediaText>,
    pub description: Option<MediaText>,
    pub player: Option<MediaPlayer>,
    pub hashes: Option<Vec<MediaHash>>,
    pub restriction: Option<MediaRestriction>,
    pub community: Option<MediaCommunity>,
    pub comments: Option<Vec<String>>,
    pub embed: Option<MediaEmbed>,
    pub responses: Option<Vec<String>>,
    pub back_links: Option<Vec<String>>,
    pub status: Option<MediaStatus>,
    pub prices: Option<Vec<MediaPrice>>,
    pub license: Option<MediaLicense>,
    pub sub_titles: Option<Vec<MediaSubTitle>>,
    pub peer_links: Option<Vec<MediaPeerLink>>,
    pub location: Option<MediaLocation>,
    pub rights: Option<MediaRights>,
    pub scenes: Option<Vec<MediaScene>>,
}

impl MediaNamespace {
    pub fn group_mut(&mut self) -> &mut MediaGroup {
        self.group.get_or_insert_with(Default::default)
    }

    pub fn community_mut(&mut self) -> &mut MediaCommunity {
        self.community.get_or_insert_with(Default::default)
    }

    /// First thumbnail URL, looking inside `media:group` when the item
    /// carries none directly.
    pub fn thumbnail_url(&self) -> Option<&str> {
        let direct = self.thumbnails.as_deref().and_then(|t| t.first());
        let grouped = self
            .group
            .as_ref()
            .and_then(|g| g.thumbnails.as_deref())
            .and_then(|t| t.first());
        direct.or(grouped).and_then(|t| t.url.as_deref())
    }
}

/// `media:group`: alternate renditions of the same item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaGroup {
    pub contents: Option<Vec<MediaContent>>,
    pub credits: Option<Vec<MediaCredit>>,
    pub category: Option<MediaCategory>,
    pub rating: Option<MediaRating>,
    pub thumbnails: Option<Vec<MediaThumbnail>>,
    pub title: Option<MediaText>,
    pub description: Option<MediaText>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaContent {
    pub url: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub medium: Option<String>,
    pub is_default: Option<bool>,
    pub expression: Option<String>,
    pub bitrate: Option<i64>,
    pub framerate: Option<f64>,
    pub sampling_rate: Option<f64>,
    pub channels: Option<i64>,
    pub duration: Option<Duration>,
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaCredit {
    pub value: Option<String>,
    pub role: Option<String>,
    pub scheme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaCategory {
    pub value: Option<String>,
    pub scheme: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaRating {
    pub value: Option<String>,
    pub scheme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaThumbnail {
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Offset into the media the thumbnail was taken at.
    pub time: Option<Duration>,
}

/// `media:title` / `media:description` with their `type` (plain or html).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaText {
    pub value: Option<String>,
    pub text_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaPlayer {
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaHash {
    pub value: Option<String>,
    pub algorithm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaRestriction {
    pub value: Option<String>,
    pub relationship: Option<String>,
    pub restriction_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaCommunity {
    pub star_rating: Option<MediaStarRating>,
    pub statistics: Option<MediaStatistics>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaStarRating {
    pub average: Option<f64>,
    pub count: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaStatistics {
    pub views: Option<i64>,
    pub favorites: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaEmbed {
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub params: Option<Vec<MediaParam>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaParam {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaStatus {
    pub state: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaPrice {
    pub price: Option<f64>,
    pub price_type: Option<String>,
    pub info: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLicense {
    pub value: Option<String>,
    pub license_type: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaSubTitle {
    pub href: Option<String>,
    pub lang: Option<String>,
    pub sub_title_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaPeerLink {
    pub href: Option<String>,
    pub peer_link_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaLocation {
    pub description: Option<String>,
    pub start: Option<Duration>,
    pub end: Option<Duration>,
    pub position: Option<GeoPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Parses `"lat,lng"` or the GeoRSS / GML form `"lat lng"`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let latitude = parts.next()?.parse::<f64>().ok()?;
        let longitude = parts.next()?.parse::<f64>().ok()?;
        if parts.next().is_some() || !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaRights {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaScene {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<Duration>,
    pub end_time: Option<Duration>,
}
