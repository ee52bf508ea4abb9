//! Fetch-then-compose flow of one run.
//!
//! The only suspension point is the feed fetch; everything after it is plain
//! synchronous construction of a fresh [`Map`].

use crate::{
    core::{builder::MapBuilder, config::QuakeMapConfig, map::Map},
    data::feed::{load_features, FeedSource},
    layers::quakes::EarthquakeLayer,
    Result,
};

/// Outcome of one run
pub struct Composition {
    pub map: Map,
    /// Markers placed on the earthquake overlay
    pub markers: usize,
    /// Features left out because they were malformed
    pub skipped: usize,
}

/// Build the overlay from `features`, then the full map around it
pub fn compose(features: &[serde_json::Value], config: &QuakeMapConfig) -> Result<Composition> {
    let overlay = EarthquakeLayer::from_features(features);
    let (markers, skipped) = (overlay.len(), overlay.skipped());

    let map = MapBuilder::from_config(config)
        .with_overlay(Box::new(overlay))
        .build()?;

    Ok(Composition {
        map,
        markers,
        skipped,
    })
}

/// Fetch the feed from `source` and compose the map
pub async fn run(source: &dyn FeedSource, config: &QuakeMapConfig) -> Result<Composition> {
    let features = load_features(source).await?;
    let composition = compose(&features, config)?;

    if composition.skipped > 0 {
        log::warn!(
            "{} of {} features were malformed and left off the map",
            composition.skipped,
            features.len()
        );
    }
    log::info!("composed map with {} earthquakes", composition.markers);
    Ok(composition)
}
