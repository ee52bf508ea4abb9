pub mod base;
pub mod macros;
pub mod manager;
pub mod marker;
pub mod quakes;
pub mod tile;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use manager::LayerManager;
