use crate::photos::model::{GeoPoint, Photo};
use indexmap::IndexMap;
use serde::Serialize;

/// Photos whose coordinates fall in the same ~111 m grid cell, in the
/// order the cell was first seen. Feeds the map sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct LocationGroup {
    /// Display coordinates: the first photo's own, unrounded.
    pub lat: f64,
    pub lng: f64,
    /// Place name of the first photo seen in the cell. First wins; later
    /// photos with a different name do not change it.
    pub place_name: Option<String>,
    pub photos: Vec<Photo>,
}

fn trunc3(v: f64) -> f64 {
    (v * 1000.0).trunc() / 1000.0
}

/// Grid key clustering nearby shots: both coordinates truncated to three
/// decimal places, rendered as "lat,lng".
pub fn grid_key(point: GeoPoint) -> String {
    format!("{:.3},{:.3}", trunc3(point.lat), trunc3(point.lng))
}

/// Cluster mappable photos by grid cell.
///
/// Photos without a location contribute to no group and no count. The
/// result partitions the mappable subsequence of the input; groups come
/// back in first-seen order with photos in input order.
pub fn group_by_location(photos: &[Photo]) -> Vec<LocationGroup> {
    let mut groups: IndexMap<String, LocationGroup> = IndexMap::new();

    for photo in photos {
        let point = match photo.location {
            Some(p) => p,
            None => continue,
        };
        groups
            .entry(grid_key(point))
            .or_insert_with(|| LocationGroup {
                lat: point.lat,
                lng: point.lng,
                place_name: photo.place_name.clone(),
                photos: Vec::new(),
            })
            .photos
            .push(photo.clone());
    }

    groups.into_values().collect()
}
