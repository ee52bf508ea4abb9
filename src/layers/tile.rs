use crate::{
    core::{
        constants::{
            DEFAULT_SUBDOMAINS, IMAGERY_ATTRIBUTION, IMAGERY_TILE_URL, STREET_ATTRIBUTION,
            STREET_TILE_URL, TOPO_ATTRIBUTION, TOPO_TILE_URL,
        },
        geo::TileCoord,
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
};
use serde::{Deserialize, Serialize};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Available subdomains for load balancing, substituted for `{s}`
    pub subdomains: Vec<String>,
    /// Attribution markup; providers require it to be shown verbatim
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: STREET_TILE_URL.to_string(),
            subdomains: DEFAULT_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
            attribution: STREET_ATTRIBUTION.to_string(),
            tile_size: crate::core::constants::TILE_SIZE,
            max_zoom: 18,
            min_zoom: 0,
        }
    }
}

/// A base layer that displays raster tiles from a tile server
#[derive(Debug, Clone)]
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
}

impl TileLayer {
    /// Create a new tile layer with default OpenStreetMap tiles
    pub fn new(id: String, name: String) -> Self {
        Self::with_options(id, name, TileLayerOptions::default())
    }

    /// Create a new tile layer with custom options
    pub fn with_options(id: String, name: String, options: TileLayerOptions) -> Self {
        let properties = LayerProperties::new(id, name, LayerType::Tile);
        Self {
            properties,
            options,
        }
    }

    /// OpenStreetMap standard street tiles
    pub fn openstreetmap(id: String, name: String) -> Self {
        Self::with_options(id, name, TileLayerOptions::default())
    }

    /// OpenTopoMap topographic tiles
    pub fn opentopomap(id: String, name: String) -> Self {
        let options = TileLayerOptions {
            url_template: TOPO_TILE_URL.to_string(),
            attribution: TOPO_ATTRIBUTION.to_string(),
            max_zoom: 17,
            ..TileLayerOptions::default()
        };
        Self::with_options(id, name, options)
    }

    /// Esri World Imagery satellite tiles
    pub fn esri_world_imagery(id: String, name: String) -> Self {
        let options = TileLayerOptions {
            url_template: IMAGERY_TILE_URL.to_string(),
            subdomains: vec![], // ArcGIS doesn't use subdomains
            attribution: IMAGERY_ATTRIBUTION.to_string(),
            ..TileLayerOptions::default()
        };
        Self::with_options(id, name, options)
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn attribution(&self) -> &str {
        &self.options.attribution
    }

    /// Expand the URL template for one tile.
    ///
    /// `{s}` rotates through the subdomains by tile position so neighbouring
    /// tiles spread across servers.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        let subdomain = if self.options.subdomains.is_empty() {
            ""
        } else {
            let idx = ((coord.x as usize) + (coord.y as usize)) % self.options.subdomains.len();
            self.options.subdomains[idx].as_str()
        };

        self.options
            .url_template
            .replace("{s}", subdomain)
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "urlTemplate": self.options.url_template,
            "attribution": self.options.attribution,
            "subdomains": self.options.subdomains,
            "tileSize": self.options.tile_size,
            "minZoom": self.options.min_zoom,
            "maxZoom": self.options.max_zoom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_tile_url() {
        let layer = TileLayer::openstreetmap("street".to_string(), "Street Map".to_string());
        assert_eq!(
            layer.tile_url(TileCoord::new(3, 6, 4)),
            "https://a.tile.openstreetmap.org/4/3/6.png"
        );
        assert_eq!(
            layer.tile_url(TileCoord::new(4, 6, 4)),
            "https://b.tile.openstreetmap.org/4/4/6.png"
        );
        assert_eq!(layer.layer_type(), LayerType::Tile);
    }

    #[test]
    fn test_imagery_swaps_x_and_y_in_template() {
        let layer = TileLayer::esri_world_imagery("imagery".to_string(), "Imagery".to_string());
        assert_eq!(
            layer.tile_url(TileCoord::new(3, 6, 4)),
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/4/6/3"
        );
        assert!(layer.attribution().starts_with("Tiles &copy; Esri"));
    }

    #[test]
    fn test_topo_options() {
        let layer = TileLayer::opentopomap("topo".to_string(), "Topographic Map".to_string());
        let options = layer.options();
        assert_eq!(options["urlTemplate"], "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png");
        assert_eq!(options["maxZoom"], 17);
        assert_eq!(options["subdomains"], serde_json::json!(["a", "b", "c"]));
        assert!(layer.attribution().contains("OpenTopoMap"));
    }
}
