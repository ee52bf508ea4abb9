//! Configuration for the feed loader, the initial view and the map controls.
//!
//! Everything has a `Default` matching the stock earthquake map, so most
//! callers only ever touch `QuakeMapConfig::default()`. The USGS feed family
//! is exposed as presets in the same spirit as the map's other defaults.

use crate::core::constants::{
    DEFAULT_CENTER, DEFAULT_FEED_URL, DEFAULT_ZOOM, MAP_CONTAINER_ID, USER_AGENT,
    USGS_SUMMARY_BASE,
};
use crate::core::geo::LatLng;
use crate::ui::elements::Position;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum magnitude selector of the USGS summary feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedMagnitude {
    Significant,
    M4_5,
    M2_5,
    M1_0,
    All,
}

impl FeedMagnitude {
    fn slug(&self) -> &'static str {
        match self {
            Self::Significant => "significant",
            Self::M4_5 => "4.5",
            Self::M2_5 => "2.5",
            Self::M1_0 => "1.0",
            Self::All => "all",
        }
    }
}

/// Time window selector of the USGS summary feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedPeriod {
    Hour,
    Day,
    Week,
    Month,
}

impl FeedPeriod {
    fn slug(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// GeoJSON FeatureCollection endpoint
    pub url: String,
    /// User agent sent with the request
    pub user_agent: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl FeedConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// One of the USGS summary feeds, e.g. `4.5_day.geojson`
    pub fn usgs(magnitude: FeedMagnitude, period: FeedPeriod) -> Self {
        Self::new(format!(
            "{}/{}_{}.geojson",
            USGS_SUMMARY_BASE,
            magnitude.slug(),
            period.slug()
        ))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub center: LatLng,
    pub zoom: f64,
    /// Id of the host element the map mounts into
    pub container_id: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            container_id: MAP_CONTAINER_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    pub layer_control_collapsed: bool,
    pub layer_control_position: Position,
    pub legend_position: Position,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            layer_control_collapsed: false,
            layer_control_position: Position::TopRight,
            legend_position: Position::BottomRight,
        }
    }
}

/// Top-level configuration of one earthquake map run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuakeMapConfig {
    pub feed: FeedConfig,
    pub view: ViewConfig,
    pub controls: ControlConfig,
}

impl QuakeMapConfig {
    pub fn with_feed(mut self, feed: FeedConfig) -> Self {
        self.feed = feed;
        self
    }

    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.view.center = center;
        self.view.zoom = zoom;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feed_is_all_week() {
        let config = FeedConfig::default();
        assert_eq!(
            config.url,
            FeedConfig::usgs(FeedMagnitude::All, FeedPeriod::Week).url
        );
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("quakemap/"));
    }

    #[test]
    fn test_usgs_presets() {
        assert_eq!(
            FeedConfig::usgs(FeedMagnitude::M4_5, FeedPeriod::Day).url,
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_day.geojson"
        );
        assert_eq!(
            FeedConfig::usgs(FeedMagnitude::Significant, FeedPeriod::Month).url,
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_month.geojson"
        );
    }

    #[test]
    fn test_default_view_and_controls() {
        let config = QuakeMapConfig::default();
        assert_eq!(config.view.center, LatLng::new(32.7832, -104.5085));
        assert_eq!(config.view.zoom, 4.0);
        assert_eq!(config.view.container_id, "map");
        assert!(!config.controls.layer_control_collapsed);
        assert_eq!(config.controls.legend_position, Position::BottomRight);
    }

    #[test]
    fn test_config_overrides() {
        let config = QuakeMapConfig::default()
            .with_feed(
                FeedConfig::new("http://localhost/feed.geojson")
                    .with_timeout(Duration::from_secs(5)),
            )
            .with_view(LatLng::new(0.0, 0.0), 2.0);
        assert_eq!(config.feed.url, "http://localhost/feed.geojson");
        assert_eq!(config.feed.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.view.zoom, 2.0);
    }
}
