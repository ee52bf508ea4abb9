use crate::{
    core::{
        constants::{LEGEND_CLASS, LEGEND_TITLE},
        depth::DEPTH_BANDS,
    },
    ui::{elements::Position, popup::escape_html, style::Color},
};
use serde::{Deserialize, Serialize};

/// Id and display name of a layer listed in the layer control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub id: String,
    pub name: String,
}

/// Layer switcher: one radio entry per base layer, one checkbox per overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerControl {
    pub base_layers: Vec<LayerEntry>,
    pub overlays: Vec<LayerEntry>,
    /// Collapsed controls only expand on hover
    pub collapsed: bool,
    pub position: Position,
}

impl LayerControl {
    pub fn new(position: Position, collapsed: bool) -> Self {
        Self {
            base_layers: Vec::new(),
            overlays: Vec::new(),
            collapsed,
            position,
        }
    }

    pub fn add_base_layer(&mut self, id: &str, name: &str) {
        self.base_layers.push(LayerEntry {
            id: id.to_string(),
            name: name.to_string(),
        });
    }

    pub fn add_overlay(&mut self, id: &str, name: &str) {
        self.overlays.push(LayerEntry {
            id: id.to_string(),
            name: name.to_string(),
        });
    }
}

impl Default for LayerControl {
    fn default() -> Self {
        Self::new(Position::TopRight, false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Static key shown in a map corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
    pub position: Position,
    /// CSS classes of the legend container
    pub class_name: String,
}

impl Legend {
    /// Depth legend, one entry per band in table order.
    ///
    /// Built from the band table alone, so it never depends on feed data.
    pub fn depth(position: Position) -> Self {
        let entries = DEPTH_BANDS
            .iter()
            .map(|band| LegendEntry {
                label: band.label(),
                color: band.color,
            })
            .collect();

        Self {
            title: LEGEND_TITLE.to_string(),
            entries,
            position,
            class_name: LEGEND_CLASS.to_string(),
        }
    }

    /// Inner markup of the legend container: the caption followed by one
    /// swatch and label per line.
    pub fn to_html(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!("<strong>{}</strong>", escape_html(&self.title)));
        for entry in &self.entries {
            lines.push(format!(
                "<i style=\"background:{}\"></i> {}",
                entry.color.to_hex(),
                escape_html(&entry.label)
            ));
        }
        lines.join("<br>")
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::depth(Position::BottomRight)
    }
}
