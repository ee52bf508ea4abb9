use crate::{
    core::geo::LatLng,
    ui::{popup::Popup, style::MarkerStyle},
};

/// Circle drawn at a geographic position with a pixel radius
#[derive(Debug, Clone)]
pub struct CircleMarker {
    id: String,
    position: LatLng,
    style: MarkerStyle,
    popup: Option<Popup>,
}

impl CircleMarker {
    pub fn new(id: String, position: LatLng, style: MarkerStyle) -> Self {
        Self {
            id,
            position,
            style,
            popup: None,
        }
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Circle marker options as the page script reads them
    pub fn to_options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "lat": self.position.lat,
            "lng": self.position.lng,
            "radius": self.style.radius,
            "color": self.style.color,
            "weight": self.style.weight,
            "fillColor": self.style.fill_color,
            "fillOpacity": self.style.fill_opacity,
            "popup": self.popup.as_ref().map(Popup::to_html),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::Color;

    #[test]
    fn test_marker_options() {
        let style = MarkerStyle::default()
            .with_radius(20.0)
            .with_fill_color(Color::rgb(0xa2, 0xdc, 0x00));
        let marker = CircleMarker::new("q1".to_string(), LatLng::new(35.0, -100.0), style)
            .with_popup(Popup::new().with_entry("Location", "Somewhere"));

        let options = marker.to_options();
        assert_eq!(options["id"], "q1");
        assert_eq!(options["lat"], 35.0);
        assert_eq!(options["lng"], -100.0);
        assert_eq!(options["radius"], 20.0);
        assert_eq!(options["color"], "#000000");
        assert_eq!(options["fillColor"], "#a2dc00");
        assert_eq!(options["fillOpacity"], 0.7);
        assert_eq!(options["popup"], "<h3><b>Location:</b> Somewhere</h3>");
    }

    #[test]
    fn test_marker_without_popup() {
        let marker = CircleMarker::new(
            "q2".to_string(),
            LatLng::new(1.0, 2.0),
            MarkerStyle::default(),
        );
        assert!(marker.popup().is_none());
        assert!(marker.to_options()["popup"].is_null());
        assert_eq!(marker.id(), "q2");
    }
}
