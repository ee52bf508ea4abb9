pub mod controls;
pub mod elements;
pub mod popup;
pub mod style;

pub use controls::{LayerControl, LayerEntry, Legend, LegendEntry};

pub use elements::Position;

pub use popup::{Popup, PopupEntry};

pub use style::{Color, MarkerStyle};
