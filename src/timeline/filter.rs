use crate::photos::model::Photo;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Filter state owned by the timeline's filter controls.
///
/// Every constraint is optional; an unset (or blank) field constrains
/// nothing. Month is 1-indexed, matching the month dropdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoFilter {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub search_text: Option<String>,
}

impl PhotoFilter {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.normalized_search().is_none()
    }

    /// Lowercased, trimmed search needle; None when the field is unset or blank.
    fn normalized_search(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// True iff the photo satisfies every active constraint.
    ///
    /// Year and month apply to `capture_time ?? upload_time`; a photo with
    /// neither timestamp fails any active year or month constraint. The
    /// search needle matches case-insensitively against file name,
    /// description, place name, and anecdote; absent fields never match.
    pub fn matches(&self, photo: &Photo) -> bool {
        let ts = photo.best_timestamp();

        if let Some(year) = self.year {
            match ts {
                Some(t) if t.year() == year => {}
                _ => return false,
            }
        }

        if let Some(month) = self.month {
            match ts {
                Some(t) if t.month() == month => {}
                _ => return false,
            }
        }

        if let Some(needle) = self.normalized_search() {
            if !searchable_fields(photo).any(|field| field.to_lowercase().contains(&needle)) {
                return false;
            }
        }

        true
    }
}

fn searchable_fields(photo: &Photo) -> impl Iterator<Item = &str> {
    std::iter::once(photo.file_name.as_str())
        .chain(photo.description.as_deref())
        .chain(photo.place_name.as_deref())
        .chain(photo.anecdote.as_deref())
}

/// Retain the photos matching `filter`, preserving input order.
/// An empty result is valid; nothing here errors.
pub fn filter_photos(photos: &[Photo], filter: &PhotoFilter) -> Vec<Photo> {
    photos
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}
