#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    /// Raster base layer served as `{z}/{x}/{y}` tiles
    Tile,
    /// Group of vector markers drawn over the base layer
    FeatureGroup,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::FeatureGroup => write!(f, "feature-group"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            z_index: 0,
            visible: true,
        }
    }
}

/// Common surface of every layer a [`Map`](crate::Map) can hold.
///
/// `options` is the layer's description in the terms of the web mapping
/// widget; the HTML renderer consumes it verbatim.
pub trait LayerTrait: Send + Sync {
    fn id(&self) -> &str;

    /// Display name, as shown in the layer control
    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Stacking order; higher draws on top
    fn z_index(&self) -> i32;

    fn set_z_index(&mut self, z_index: i32);

    fn options(&self) -> serde_json::Value;

    fn as_any(&self) -> &dyn std::any::Any;
}
