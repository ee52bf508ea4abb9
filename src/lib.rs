//! # quakemap
//!
//! Fetches a live earthquake GeoJSON feed and composes it into an interactive
//! web map: three switchable base layers, one overlay of depth-colored circle
//! markers with popups, a layer control, and a static depth legend.
//!
//! The map itself is a plain value ([`Map`]) that can be inspected and toggled
//! without a browser; [`HtmlRenderer`] turns it into a self-contained Leaflet
//! page.

pub mod core;
pub mod data;
pub mod layers;
pub mod pipeline;
pub mod prelude;
pub mod rendering;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    builder::MapBuilder,
    config::{FeedConfig, QuakeMapConfig},
    depth::{band_for, color_for, DepthBand, DEPTH_BANDS},
    geo::{LatLng, TileCoord},
    map::Map,
};

pub use data::{
    feed::{FeedSource, HttpFeed, StaticFeed},
    geojson::{Earthquake, FeatureCollection},
};

pub use layers::{marker::CircleMarker, quakes::EarthquakeLayer, tile::TileLayer};

pub use ui::{
    controls::{LayerControl, Legend},
    popup::Popup,
    style::{Color, MarkerStyle},
};

pub use rendering::html::HtmlRenderer;

pub use pipeline::Composition;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid feature: {0}")]
    InvalidFeature(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Error type alias for convenience
pub type Error = MapError;
