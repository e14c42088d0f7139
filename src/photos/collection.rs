use crate::photos::model::Photo;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("cannot read photo collection: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed photo collection: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory photo list for the signed-in family, as returned by the
/// backend's album, timeline, or map listings. Owns no persistent state;
/// the grouping operations are pure transforms over `photos()`.
#[derive(Debug, Clone, Default)]
pub struct PhotoCollection {
    photos: Vec<Photo>,
}

impl PhotoCollection {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Parse a backend listing response (a JSON array of photo records).
    pub fn from_json(text: &str) -> Result<Self, CollectionError> {
        let photos: Vec<Photo> = serde_json::from_str(text)?;
        Ok(Self { photos })
    }

    pub fn load(path: &Path) -> Result<Self, CollectionError> {
        let text = std::fs::read_to_string(path)?;
        let collection = Self::from_json(&text)?;
        tracing::debug!("loaded {} photos from {:?}", collection.len(), path);
        Ok(collection)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    /// Photos belonging to one album, in listing order.
    pub fn photos_in_album(&self, album_id: &str) -> Vec<Photo> {
        self.photos
            .iter()
            .filter(|p| p.album_id == album_id)
            .cloned()
            .collect()
    }
}

/// Resolve a photo's relative file URL against the backend base URL.
pub fn resolve_file_url(base_url: &str, file_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if file_url.starts_with('/') {
        format!("{}{}", base, file_url)
    } else {
        format!("{}/{}", base, file_url)
    }
}
