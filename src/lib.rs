pub mod config;
pub mod map;
pub mod photos;
pub mod session;
pub mod timeline;

use anyhow::Context;
use photos::collection::{resolve_file_url, PhotoCollection};
use std::path::Path;
use timeline::filter::PhotoFilter;

/// CLI entry: render the timeline periods and location clusters for a
/// saved photo listing (a JSON array of photo records).
pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: memoria <photos.json>")?;
    let config = config::read_config(&config::memoria_home()).unwrap_or_default();
    let collection = PhotoCollection::load(Path::new(&path))?;
    tracing::info!("{} photos in collection", collection.len());

    let visible = timeline::filter::filter_photos(collection.photos(), &PhotoFilter::default());
    let periods = timeline::periods::group_by_period(&visible, config.locale);
    let years = timeline::periods::extract_years(collection.photos());
    println!(
        "{} photos across {} periods (years: {:?})",
        visible.len(),
        periods.len(),
        years
    );
    for (label, group) in &periods {
        println!("\n{} ({} photos)", label, group.len());
        for photo in group {
            println!(
                "  {}  {}",
                photo.file_name,
                resolve_file_url(&config.backend_base_url, &photo.file_url)
            );
        }
    }

    let clusters = map::group_by_location(collection.photos());
    println!("\n{} locations", clusters.len());
    for cluster in &clusters {
        println!(
            "  {:.4}, {:.4}  {} ({} photos)",
            cluster.lat,
            cluster.lng,
            cluster.place_name.as_deref().unwrap_or("unnamed place"),
            cluster.photos.len()
        );
    }

    Ok(())
}
