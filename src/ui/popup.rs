use crate::data::geojson::Earthquake;
use serde::{Deserialize, Serialize};

/// Date format of popup timestamps, e.g. `Tue Nov 14 2023 22:13:20 UTC`
pub const POPUP_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// Informational popup bound to a marker.
///
/// Holds labelled lines; the first line is rendered as the heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub entries: Vec<PopupEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupEntry {
    pub label: String,
    pub value: String,
}

impl Popup {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(PopupEntry {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Location, time, magnitude and depth of one event
    pub fn for_earthquake(quake: &Earthquake) -> Self {
        Self::new()
            .with_entry("Location", quake.place.as_str())
            .with_entry("Date & Time", quake.time.format(POPUP_TIME_FORMAT).to_string())
            .with_entry("Magnitude", quake.magnitude.to_string())
            .with_entry("Depth", format!("{} Km", quake.depth_km))
    }

    /// Markup for the popup body. Labels and values are escaped.
    pub fn to_html(&self) -> String {
        let entry_html = |entry: &PopupEntry| {
            format!(
                "<b>{}:</b> {}",
                escape_html(&entry.label),
                escape_html(&entry.value)
            )
        };

        let Some((heading, rest)) = self.entries.split_first() else {
            return String::new();
        };

        let mut html = format!("<h3>{}</h3>", entry_html(heading));
        if !rest.is_empty() {
            let body: Vec<String> = rest.iter().map(entry_html).collect();
            html.push_str("<hr><p>");
            html.push_str(&body.join("<hr>"));
            html.push_str("</p>");
        }
        html
    }

    /// One `label: value` line per entry
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.label, entry.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Popup {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes text for use inside HTML element content or quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
