use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social network profile URLs attached to a listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// `(network, url)` pairs for every non-blank link, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("facebook", self.facebook.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, url)| match url {
            Some(u) if !u.trim().is_empty() => Some((network, u)),
            _ => None,
        })
        .collect()
    }
}

/// A directory listing. Seed providers carry a rating and the featured flag;
/// user-authored listings are converted into this shape for browsing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub featured: bool,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    /// ISO-8601 text as stored; parse with [`parse_timestamp`].
    pub created_at: String,
}

impl ServiceProvider {
    /// Rating used for ordering; absent ratings count as zero.
    pub fn rating_or_zero(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }

    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse a stored creation timestamp. Accepts RFC 3339, a naive date-time,
/// or a bare date (midnight UTC). Anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
