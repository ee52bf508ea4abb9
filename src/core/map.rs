use crate::{
    core::{config::ViewConfig, geo::LatLng},
    layers::{base::LayerTrait, manager::LayerManager, quakes::EarthquakeLayer},
    ui::controls::{LayerControl, Legend},
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// Initial view of the map and the element it mounts into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: f64,
    pub container_id: String,
}

impl From<&ViewConfig> for MapView {
    fn from(config: &ViewConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            container_id: config.container_id.clone(),
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::from(&ViewConfig::default())
    }
}

/// A composed map: base layers, overlays and controls.
///
/// Exactly one base layer is active once any has been added; overlays are
/// toggled independently. Each `Map` is an owned value, so several can
/// coexist.
pub struct Map {
    view: MapView,
    layer_manager: LayerManager,
    /// Base layer ids in registration order
    base_layer_ids: Vec<String>,
    /// Overlay ids in registration order
    overlay_ids: Vec<String>,
    active_base: Option<String>,
    layer_control: Option<LayerControl>,
    legend: Option<Legend>,
}

impl Map {
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            layer_manager: LayerManager::new(),
            base_layer_ids: Vec::new(),
            overlay_ids: Vec::new(),
            active_base: None,
            layer_control: None,
            legend: None,
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Registers a base layer. The first one added becomes active; later ones
    /// start hidden.
    pub fn add_base_layer(&mut self, mut layer: Box<dyn LayerTrait>) -> Result<()> {
        let id = layer.id().to_string();
        let activate = self.active_base.is_none();
        layer.set_visible(activate);
        self.layer_manager.add_layer(layer)?;

        self.base_layer_ids.push(id.clone());
        if activate {
            self.active_base = Some(id);
        }
        Ok(())
    }

    /// Registers an overlay, keeping its current visibility
    pub fn add_overlay(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let id = layer.id().to_string();
        self.layer_manager.add_layer(layer)?;
        self.overlay_ids.push(id);
        Ok(())
    }

    /// Makes `layer_id` the only visible base layer
    pub fn select_base_layer(&mut self, layer_id: &str) -> Result<()> {
        if !self.base_layer_ids.iter().any(|id| id == layer_id) {
            return Err(MapError::Layer(format!("unknown base layer: {layer_id}")));
        }

        for id in &self.base_layer_ids {
            let visible = id == layer_id;
            self.layer_manager
                .with_layer_mut(id, |layer| layer.set_visible(visible));
        }
        self.active_base = Some(layer_id.to_string());
        log::debug!("base layer switched to {layer_id}");
        Ok(())
    }

    pub fn set_overlay_visible(&mut self, layer_id: &str, visible: bool) -> Result<()> {
        if !self.overlay_ids.iter().any(|id| id == layer_id) {
            return Err(MapError::Layer(format!("unknown overlay: {layer_id}")));
        }
        self.layer_manager
            .with_layer_mut(layer_id, |layer| layer.set_visible(visible));
        Ok(())
    }

    pub fn active_base_layer(&self) -> Option<&dyn LayerTrait> {
        self.active_base
            .as_deref()
            .and_then(|id| self.layer_manager.get_layer(id))
    }

    /// Base layers in registration order
    pub fn base_layers(&self) -> Vec<&dyn LayerTrait> {
        self.collect(&self.base_layer_ids)
    }

    /// Overlays in stacking order, bottom first
    pub fn overlays(&self) -> Vec<&dyn LayerTrait> {
        self.layer_manager
            .layers()
            .into_iter()
            .filter(|layer| self.overlay_ids.iter().any(|id| id == layer.id()))
            .collect()
    }

    pub fn layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layer_manager.get_layer(layer_id)
    }

    /// Ids of the layers shown on load: the active base layer and every
    /// visible overlay
    pub fn active_layer_ids(&self) -> Vec<&str> {
        self.active_base
            .as_deref()
            .into_iter()
            .chain(
                self.overlays()
                    .into_iter()
                    .filter(|layer| layer.is_visible())
                    .map(|layer| layer.id()),
            )
            .collect()
    }

    /// The first earthquake overlay, if one was added
    pub fn earthquakes(&self) -> Option<&EarthquakeLayer> {
        self.overlays()
            .into_iter()
            .find_map(|layer| layer.as_any().downcast_ref::<EarthquakeLayer>())
    }

    pub fn set_layer_control(&mut self, control: LayerControl) {
        self.layer_control = Some(control);
    }

    pub fn layer_control(&self) -> Option<&LayerControl> {
        self.layer_control.as_ref()
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    fn collect(&self, ids: &[String]) -> Vec<&dyn LayerTrait> {
        ids.iter()
            .filter_map(|id| self.layer_manager.get_layer(id))
            .collect()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(MapView::default())
    }
}
