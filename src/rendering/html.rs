//! Renders a composed [`Map`] as a standalone Leaflet page.
//!
//! The page is a fixed template plus one JSON scene. The bootstrap script only
//! interprets the scene, so everything specific to a run (layers, markers,
//! popups, legend) lives in data produced on the Rust side.

use crate::{
    core::map::Map,
    layers::base::LayerTrait,
    ui::popup::escape_html,
    MapError, Result,
};
use serde::Serialize;
use std::path::Path;

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__TITLE__</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    .quakemap-container { height: 100%; width: 100%; }
    .info {
      padding: 6px 8px;
      font: 14px/16px Arial, Helvetica, sans-serif;
      background: rgba(255, 255, 255, 0.8);
      box-shadow: 0 0 15px rgba(0, 0, 0, 0.2);
      border-radius: 5px;
    }
    .legend { line-height: 18px; color: #555; }
    .legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.7; }
  </style>
</head>

<body>
  <div id="__CONTAINER__" class="quakemap-container"></div>
  <script>
    (function () {
      const scene = __SCENE__;

      function circle(m) {
        const marker = L.circleMarker([m.lat, m.lng], {
          radius: m.radius,
          color: m.color,
          weight: m.weight,
          fillColor: m.fillColor,
          fillOpacity: m.fillOpacity
        });
        if (m.popup) {
          marker.bindPopup(m.popup);
        }
        return marker;
      }

      function buildLayer(layer) {
        const o = layer.options;
        switch (layer.kind) {
          case "tile":
            return L.tileLayer(o.urlTemplate, {
              attribution: o.attribution,
              subdomains: o.subdomains,
              tileSize: o.tileSize,
              minZoom: o.minZoom,
              maxZoom: o.maxZoom
            });
          default:
            return L.featureGroup((o.markers || []).map(circle));
        }
      }

      const byId = {};
      const baseMaps = {};
      const overlayMaps = {};
      scene.baseLayers.forEach(function (layer) {
        byId[layer.id] = buildLayer(layer);
        baseMaps[layer.name] = byId[layer.id];
      });
      scene.overlays.forEach(function (layer) {
        byId[layer.id] = buildLayer(layer);
        overlayMaps[layer.name] = byId[layer.id];
      });

      const map = L.map(scene.container, {
        center: scene.center,
        zoom: scene.zoom,
        layers: scene.active.map(function (id) { return byId[id]; })
      });

      if (scene.layerControl) {
        L.control.layers(baseMaps, overlayMaps, {
          collapsed: scene.layerControl.collapsed,
          position: scene.layerControl.position
        }).addTo(map);
      }

      if (scene.legend) {
        const legend = L.control({ position: scene.legend.position });
        legend.onAdd = function () {
          const div = L.DomUtil.create("div", scene.legend.className);
          div.innerHTML = scene.legend.html;
          return div;
        };
        legend.addTo(map);
      }
    })();
  </script>
</body>

</html>
"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Scene<'a> {
    container: &'a str,
    center: [f64; 2],
    zoom: f64,
    base_layers: Vec<SceneLayer<'a>>,
    overlays: Vec<SceneLayer<'a>>,
    active: Vec<&'a str>,
    layer_control: Option<SceneLayerControl>,
    legend: Option<SceneLegend<'a>>,
}

#[derive(Debug, Serialize)]
struct SceneLayer<'a> {
    id: &'a str,
    name: &'a str,
    kind: String,
    options: serde_json::Value,
}

impl<'a> SceneLayer<'a> {
    fn from_layer(layer: &'a dyn LayerTrait) -> Self {
        Self {
            id: layer.id(),
            name: layer.name(),
            kind: layer.layer_type().to_string(),
            options: layer.options(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SceneLayerControl {
    collapsed: bool,
    position: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneLegend<'a> {
    position: &'static str,
    class_name: &'a str,
    html: String,
}

/// Produces the HTML page for a [`Map`]
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            title: "Earthquake Map".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the full document.
    ///
    /// Fails with [`MapError::Render`] when the map has no active base layer.
    pub fn render(&self, map: &Map) -> Result<String> {
        if map.active_base_layer().is_none() {
            return Err(MapError::Render("map has no active base layer".to_string()));
        }

        let view = map.view();
        let scene = Scene {
            container: &view.container_id,
            center: [view.center.lat, view.center.lng],
            zoom: view.zoom,
            base_layers: map.base_layers().into_iter().map(SceneLayer::from_layer).collect(),
            overlays: map.overlays().into_iter().map(SceneLayer::from_layer).collect(),
            active: map.active_layer_ids(),
            layer_control: map.layer_control().map(|control| SceneLayerControl {
                collapsed: control.collapsed,
                position: control.position.as_leaflet(),
            }),
            legend: map.legend().map(|legend| SceneLegend {
                position: legend.position.as_leaflet(),
                class_name: &legend.class_name,
                html: legend.to_html(),
            }),
        };

        let title = escape_html(&self.title);
        let container = escape_html(&view.container_id);
        let scene = script_json(&scene)?;
        Ok(fill_template(
            PAGE_TEMPLATE,
            &[
                ("__TITLE__", title.as_str()),
                ("__CONTAINER__", container.as_str()),
                ("__SCENE__", scene.as_str()),
            ],
        ))
    }

    /// Render and write the document to `path`
    pub fn write_to(&self, map: &Map, path: impl AsRef<Path>) -> Result<()> {
        let html = self.render(map)?;
        std::fs::write(path.as_ref(), &html)?;
        log::info!(
            "wrote map page to {} ({} bytes)",
            path.as_ref().display(),
            html.len()
        );
        Ok(())
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitutes every placeholder in one pass over `template`, so inserted
/// values are never scanned for placeholders themselves.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = values
            .iter()
            .filter_map(|&(key, value)| rest.find(key).map(|at| (at, key, value)))
            .min_by_key(|&(at, _, _)| at);
        match next {
            Some((at, key, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// JSON that is safe to inline in a `<script>` element.
///
/// `<`, `>` and `&` only ever occur inside JSON strings, where their `\u`
/// escapes are equivalent, so markup such as `</script>` in a popup cannot
/// end the script early.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{builder::MapBuilder, config::QuakeMapConfig};
    use crate::layers::quakes::EarthquakeLayer;
    use serde_json::json;

    fn scene_of(html: &str) -> serde_json::Value {
        let start = html.find("const scene = ").unwrap() + "const scene = ".len();
        let end = start + html[start..].find(";\n").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    fn default_map(features: &[serde_json::Value]) -> Map {
        MapBuilder::from_config(&QuakeMapConfig::default())
            .with_overlay(Box::new(EarthquakeLayer::from_features(features)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_page_mounts_into_container() {
        let html = HtmlRenderer::new().render(&default_map(&[])).unwrap();
        assert!(html.contains("<div id=\"map\" class=\"quakemap-container\"></div>"));
        assert!(html.contains("leaflet.js"));
        assert!(html.contains("<title>Earthquake Map</title>"));
    }

    #[test]
    fn test_scene_describes_composition() {
        let html = HtmlRenderer::new().render(&default_map(&[])).unwrap();
        let scene = scene_of(&html);

        assert_eq!(scene["container"], "map");
        assert_eq!(scene["center"], json!([32.7832, -104.5085]));
        assert_eq!(scene["zoom"], 4.0);
        assert_eq!(scene["active"], json!(["street", "earthquakes"]));
        assert_eq!(scene["baseLayers"].as_array().unwrap().len(), 3);
        assert_eq!(scene["baseLayers"][2]["name"], "ESRI World Imagery");
        assert_eq!(scene["overlays"][0]["kind"], "feature-group");
        assert_eq!(scene["overlays"][0]["options"]["markers"], json!([]));
        assert_eq!(scene["layerControl"]["collapsed"], false);
        assert_eq!(scene["legend"]["position"], "bottomright");
        assert_eq!(scene["legend"]["className"], "info legend");
    }

    #[test]
    fn test_markup_in_popups_cannot_close_script() {
        let feature = json!({
            "properties": { "place": "</script><b>x</b>", "time": 0, "mag": 1.0 },
            "geometry": { "coordinates": [0.0, 0.0, 5.0] }
        });
        let html = HtmlRenderer::new().render(&default_map(&[feature])).unwrap();

        assert_eq!(html.matches("</script>").count(), 2);
        let scene = scene_of(&html);
        let popup = scene["overlays"][0]["options"]["markers"][0]["popup"]
            .as_str()
            .unwrap();
        assert!(popup.contains("&lt;/script&gt;&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = HtmlRenderer::new()
            .with_title("Quakes <live>")
            .render(&default_map(&[]))
            .unwrap();
        assert!(html.contains("<title>Quakes &lt;live&gt;</title>"));
    }

    #[test]
    fn test_placeholders_in_title_are_kept_literally() {
        let html = HtmlRenderer::new()
            .with_title("Quakes __CONTAINER__ __SCENE__")
            .render(&default_map(&[]))
            .unwrap();
        assert!(html.contains("<title>Quakes __CONTAINER__ __SCENE__</title>"));
        assert_eq!(html.matches("const scene = ").count(), 1);
    }

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template("<a>__X__|__Y__</a>", &[("__X__", "__Y__"), ("__Y__", "y")]);
        assert_eq!(filled, "<a>__Y__|y</a>");
    }

    #[test]
    fn test_map_without_base_layer_is_rejected() {
        let err = HtmlRenderer::new().render(&Map::default()).unwrap_err();
        assert!(matches!(err, MapError::Render(_)));
    }

    #[test]
    fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("quakemap-test-{}.html", std::process::id()));
        HtmlRenderer::new().write_to(&default_map(&[]), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!doctype html>"));
        std::fs::remove_file(&path).unwrap();
    }
}
