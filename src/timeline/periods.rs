use crate::photos::model::Photo;
use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Language used for period labels. The backend serves the same records
/// to every family member; only the rendered labels differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

impl Locale {
    fn month_name(self, month0: usize) -> &'static str {
        match self {
            Locale::English => MONTHS_EN[month0],
            Locale::Spanish => MONTHS_ES[month0],
        }
    }

    /// Bucket label for photos with no usable timestamp.
    pub fn unknown_period(self) -> &'static str {
        match self {
            Locale::English => "Unknown date",
            Locale::Spanish => "Sin fecha",
        }
    }
}

/// Render the month+year period label for a timestamp.
/// Labels come from fixed tables, not the host locale, so output is
/// stable across machines.
pub fn period_label(ts: Option<DateTime<Utc>>, locale: Locale) -> String {
    match ts {
        Some(t) => {
            let month = locale.month_name(t.month0() as usize);
            match locale {
                Locale::English => format!("{} {}", month, t.year()),
                Locale::Spanish => format!("{} de {}", month, t.year()),
            }
        }
        None => locale.unknown_period().to_string(),
    }
}

/// Partition photos into month+year periods keyed by rendered label.
///
/// Labels appear in the order first encountered while scanning the input;
/// photos within a period keep input order. No chronological re-sort
/// happens here — the view layer re-sorts before rendering if it wants to.
pub fn group_by_period(photos: &[Photo], locale: Locale) -> IndexMap<String, Vec<Photo>> {
    let mut groups: IndexMap<String, Vec<Photo>> = IndexMap::new();
    for photo in photos {
        let label = period_label(photo.best_timestamp(), locale);
        groups.entry(label).or_default().push(photo.clone());
    }
    groups
}

/// Distinct calendar years across `capture_time ?? upload_time`,
/// descending. Feeds the year-filter dropdown; undated photos contribute
/// nothing.
pub fn extract_years(photos: &[Photo]) -> Vec<i32> {
    let years: BTreeSet<i32> = photos
        .iter()
        .filter_map(|p| p.best_timestamp())
        .map(|t| t.year())
        .collect();
    years.into_iter().rev().collect()
}
