use crate::{
    core::{
        constants::{
            EARTHQUAKE_LAYER_ID, EARTHQUAKE_LAYER_NAME, MIN_MARKER_RADIUS, RADIUS_PER_MAGNITUDE,
        },
        depth::color_for,
    },
    data::geojson::Earthquake,
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        marker::CircleMarker,
    },
    ui::{popup::Popup, style::MarkerStyle},
};

/// Pixel radius for an event of magnitude `mag`, never below `MIN_MARKER_RADIUS`
pub fn marker_radius(magnitude: f64) -> f64 {
    (RADIUS_PER_MAGNITUDE * magnitude).max(MIN_MARKER_RADIUS)
}

/// Depth-colored circle style for one event
pub fn marker_style(quake: &Earthquake) -> MarkerStyle {
    MarkerStyle::default()
        .with_radius(marker_radius(quake.magnitude))
        .with_fill_color(color_for(quake.depth_km))
}

/// Overlay holding one circle marker per earthquake, in feed order
#[derive(Debug, Clone)]
pub struct EarthquakeLayer {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
    skipped: usize,
}

impl EarthquakeLayer {
    pub fn new(id: String, name: String) -> Self {
        let mut properties = LayerProperties::new(id, name, LayerType::FeatureGroup);
        properties.z_index = 1;
        Self {
            properties,
            markers: Vec::new(),
            skipped: 0,
        }
    }

    /// Build the "Earthquakes" overlay from raw feed features.
    ///
    /// Each feature is converted on its own; malformed ones are logged,
    /// counted in [`skipped`](Self::skipped) and left out.
    pub fn from_features(features: &[serde_json::Value]) -> Self {
        let mut layer = Self::new(
            EARTHQUAKE_LAYER_ID.to_string(),
            EARTHQUAKE_LAYER_NAME.to_string(),
        );
        for (index, feature) in features.iter().enumerate() {
            match Earthquake::from_feature(feature) {
                Ok(quake) => layer.push(index, &quake),
                Err(e) => {
                    log::warn!("skipping feature #{index}: {e}");
                    layer.skipped += 1;
                }
            }
        }
        log::debug!(
            "built {} earthquake markers ({} skipped)",
            layer.markers.len(),
            layer.skipped
        );
        layer
    }

    /// Append the marker for `quake`; `index` is its position in the feed
    pub fn push(&mut self, index: usize, quake: &Earthquake) {
        let id = quake
            .id
            .clone()
            .unwrap_or_else(|| format!("quake-{index}"));
        let marker = CircleMarker::new(id, quake.position, marker_style(quake))
            .with_popup(Popup::for_earthquake(quake));
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Number of features left out because they were malformed
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl LayerTrait for EarthquakeLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        let markers: Vec<serde_json::Value> =
            self.markers.iter().map(CircleMarker::to_options).collect();
        serde_json::json!({ "markers": markers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use serde_json::json;

    fn feature(mag: f64, coordinates: [f64; 3]) -> serde_json::Value {
        json!({
            "properties": { "place": "Somewhere", "time": 1700000000000i64, "mag": mag },
            "geometry": { "coordinates": coordinates }
        })
    }

    #[test]
    fn test_radius_is_four_times_magnitude() {
        assert_eq!(marker_radius(5.0), 20.0);
        assert_eq!(marker_radius(2.5), 10.0);
        assert_eq!(marker_radius(0.3), 4.0 * 0.3);
    }

    #[test]
    fn test_radius_floor() {
        assert_eq!(marker_radius(0.0), 1.0);
        assert_eq!(marker_radius(-1.2), 1.0);
        assert_eq!(marker_radius(0.25), 1.0);
    }

    #[test]
    fn test_markers_follow_feed_order_and_axis_swap() {
        let layer = EarthquakeLayer::from_features(&[
            feature(1.0, [10.0, 20.0, 5.0]),
            feature(2.0, [-30.0, -40.0, 95.0]),
        ]);

        assert_eq!(layer.len(), 2);
        assert_eq!(layer.markers()[0].position(), LatLng::new(20.0, 10.0));
        assert_eq!(layer.markers()[1].position(), LatLng::new(-40.0, -30.0));
        assert_eq!(layer.markers()[0].id(), "quake-0");
        assert_eq!(layer.markers()[1].style().fill_color.to_hex(), "#ff0819");
        assert_eq!(layer.markers()[1].style().radius, 8.0);
    }

    #[test]
    fn test_malformed_features_are_skipped() {
        let layer = EarthquakeLayer::from_features(&[
            feature(1.0, [10.0, 20.0, 5.0]),
            json!({ "properties": { "place": "No geometry", "time": 0, "mag": 1.0 } }),
            json!("not even an object"),
            feature(3.0, [0.0, 0.0, 40.0]),
        ]);

        assert_eq!(layer.len(), 2);
        assert_eq!(layer.skipped(), 2);
        assert_eq!(layer.markers()[1].id(), "quake-3");
    }

    #[test]
    fn test_empty_layer() {
        let layer = EarthquakeLayer::from_features(&[]);
        assert!(layer.is_empty());
        assert_eq!(layer.options(), json!({ "markers": [] }));
        assert_eq!(layer.name(), "Earthquakes");
        assert_eq!(layer.layer_type(), LayerType::FeatureGroup);
    }

    #[test]
    fn test_options_carry_every_marker() {
        let layer = EarthquakeLayer::from_features(&[
            feature(1.0, [10.0, 20.0, 5.0]),
            feature(1.0, [-30.0, -40.0, 5.0]),
        ]);
        let options = layer.options();
        assert_eq!(options["markers"].as_array().unwrap().len(), 2);
        assert_eq!(options["markers"][1]["lat"], -40.0);
        assert_eq!(options["markers"][1]["id"], "quake-1");
    }
}
