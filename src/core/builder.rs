//! Map builder for fluent API configuration
//!
//! `MapBuilder` assembles a [`Map`]: base layers, overlays, the layer control
//! and the depth legend, starting from the stock earthquake map defaults.

use crate::{
    core::{
        config::{ControlConfig, QuakeMapConfig},
        constants::{
            IMAGERY_LAYER_ID, IMAGERY_LAYER_NAME, STREET_LAYER_ID, STREET_LAYER_NAME,
            TOPO_LAYER_ID, TOPO_LAYER_NAME,
        },
        geo::LatLng,
        map::{Map, MapView},
    },
    layers::{base::LayerTrait, tile::TileLayer},
    ui::controls::{LayerControl, Legend},
    MapError, Result,
};

/// Street, topographic and satellite base layers, street first
pub fn default_base_layers() -> Vec<TileLayer> {
    vec![
        TileLayer::openstreetmap(STREET_LAYER_ID.to_string(), STREET_LAYER_NAME.to_string()),
        TileLayer::opentopomap(TOPO_LAYER_ID.to_string(), TOPO_LAYER_NAME.to_string()),
        TileLayer::esri_world_imagery(
            IMAGERY_LAYER_ID.to_string(),
            IMAGERY_LAYER_NAME.to_string(),
        ),
    ]
}

/// Builder for creating and configuring Map instances
pub struct MapBuilder {
    view: MapView,
    base_layers: Vec<TileLayer>,
    overlays: Vec<Box<dyn LayerTrait>>,
    controls: ControlConfig,
    legend: bool,
}

impl MapBuilder {
    /// Create a new MapBuilder with the default view, no layers, and the
    /// legend enabled
    pub fn new() -> Self {
        Self {
            view: MapView::default(),
            base_layers: Vec::new(),
            overlays: Vec::new(),
            controls: ControlConfig::default(),
            legend: true,
        }
    }

    /// Builder seeded from a run configuration, with the three default base layers
    pub fn from_config(config: &QuakeMapConfig) -> Self {
        Self::new()
            .with_map_view(MapView::from(&config.view))
            .with_controls(config.controls.clone())
            .with_default_base_layers()
    }

    pub fn with_map_view(mut self, view: MapView) -> Self {
        self.view = view;
        self
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: f64) -> Self {
        self.view.center = center;
        self.view.zoom = zoom;
        self
    }

    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.view.container_id = container_id.into();
        self
    }

    /// Add a base layer; the first one added is active on load
    pub fn with_base_layer(mut self, layer: TileLayer) -> Self {
        self.base_layers.push(layer);
        self
    }

    pub fn with_default_base_layers(mut self) -> Self {
        self.base_layers.extend(default_base_layers());
        self
    }

    pub fn with_overlay(mut self, layer: Box<dyn LayerTrait>) -> Self {
        self.overlays.push(layer);
        self
    }

    pub fn with_controls(mut self, controls: ControlConfig) -> Self {
        self.controls = controls;
        self
    }

    /// Enable or disable the depth legend
    pub fn with_legend(mut self, enabled: bool) -> Self {
        self.legend = enabled;
        self
    }

    /// Build the map. Fails when no base layer was added or layer ids collide.
    pub fn build(self) -> Result<Map> {
        if self.base_layers.is_empty() {
            return Err(MapError::Layer("a map needs at least one base layer".to_string()));
        }

        let mut map = Map::new(self.view);
        let mut control = LayerControl::new(
            self.controls.layer_control_position,
            self.controls.layer_control_collapsed,
        );

        for layer in self.base_layers {
            control.add_base_layer(layer.id(), layer.name());
            map.add_base_layer(Box::new(layer))?;
        }
        for layer in self.overlays {
            control.add_overlay(layer.id(), layer.name());
            map.add_overlay(layer)?;
        }

        map.set_layer_control(control);
        if self.legend {
            map.set_legend(Legend::depth(self.controls.legend_position));
        }

        log::debug!(
            "map built: {} base layers, {} overlays",
            map.base_layers().len(),
            map.overlays().len()
        );
        Ok(map)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
