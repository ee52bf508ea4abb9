//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::{ControlConfig, FeedConfig, FeedMagnitude, FeedPeriod, QuakeMapConfig, ViewConfig},
    depth::{band_for, color_for, DepthBand, DEPTH_BANDS},
    geo::{LatLng, TileCoord},
    map::{Map, MapView},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    manager::LayerManager,
    marker::CircleMarker,
    quakes::EarthquakeLayer,
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::data::{
    feed::{load_features, FeedSource, HttpFeed, StaticFeed},
    geojson::{Earthquake, FeatureCollection},
};

pub use crate::ui::{
    controls::{LayerControl, Legend, LegendEntry},
    elements::Position,
    popup::Popup,
    style::{Color, MarkerStyle},
};

pub use crate::rendering::html::HtmlRenderer;

pub use crate::pipeline::{compose, run, Composition};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
