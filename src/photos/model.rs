use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// GPS point as delivered by the backend's metadata extractor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraInfo {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// One photo record from the family's album, timeline, or map listing.
/// All three backend queries return the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub file_name: String,
    /// Relative path; resolve against the configured backend base URL.
    pub file_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub album_id: String,
    pub uploaded_by: String,
    #[serde(default, with = "lenient_datetime")]
    pub capture_time: Option<DateTime<Utc>>,
    #[serde(default, with = "lenient_datetime")]
    pub upload_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub anecdote: Option<String>,
    #[serde(default)]
    pub tagged_people: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub camera: Option<CameraInfo>,
}

impl Photo {
    /// The timestamp used for ordering, filtering, and period grouping.
    /// Capture time when the uploader's camera recorded one, upload time
    /// otherwise. None means the photo belongs to the unknown-period bucket.
    pub fn best_timestamp(&self) -> Option<DateTime<Utc>> {
        self.capture_time.or(self.upload_time)
    }

    pub fn is_mappable(&self) -> bool {
        self.location.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub family_id: String,
    pub created_by: String,
    #[serde(default, with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_photo_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parse a backend timestamp string.
///
/// Accepts RFC 3339 (with or without fractional seconds), naive
/// "YYYY-MM-DDTHH:MM:SS" / "YYYY-MM-DD HH:MM:SS", and bare "YYYY-MM-DD"
/// (taken as midnight). Returns None for anything else.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&nd.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Serde adapter for timestamp fields.
///
/// A malformed timestamp string deserializes to None (with a warning)
/// instead of failing the whole record; the photo then lands in the
/// unknown-period bucket.
pub(crate) mod lenient_datetime {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(|s| {
            let parsed = super::parse_timestamp(s);
            if parsed.is_none() {
                tracing::warn!("unparseable timestamp {:?} treated as missing", s);
            }
            parsed
        }))
    }
}
