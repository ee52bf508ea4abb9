//! Fixed values of the earthquake map: feed endpoint, initial view, tile
//! providers and marker styling. Keeping them in a single place makes the
//! composition easy to audit against the providers' licensing terms.

/// USGS summary feed with every event of the past seven days.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// Base URL of the USGS summary feed family.
pub const USGS_SUMMARY_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// User agent sent with feed requests.
pub const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

/// Initial map center (latitude, longitude).
pub const DEFAULT_CENTER: (f64, f64) = (32.7832, -104.5085);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 4.0;

/// Id of the host page element the map is mounted into.
pub const MAP_CONTAINER_ID: &str = "map";

/// Marker radius in pixels per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Smallest radius a marker is drawn with; events of magnitude <= 0.25 use it.
pub const MIN_MARKER_RADIUS: f64 = 1.0;

/// Fill opacity of earthquake markers.
pub const MARKER_FILL_OPACITY: f64 = 0.7;

/// Outline width of earthquake markers.
pub const MARKER_STROKE_WEIGHT: f64 = 1.0;

pub const STREET_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const TOPO_TILE_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const TOPO_ATTRIBUTION: &str = "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)";

pub const IMAGERY_TILE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
pub const IMAGERY_ATTRIBUTION: &str = "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community";

/// Subdomains rotated through for `{s}` tile templates.
pub const DEFAULT_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// Layer ids and display names.
pub const STREET_LAYER_ID: &str = "street";
pub const STREET_LAYER_NAME: &str = "Street Map";
pub const TOPO_LAYER_ID: &str = "topo";
pub const TOPO_LAYER_NAME: &str = "Topographic Map";
pub const IMAGERY_LAYER_ID: &str = "imagery";
pub const IMAGERY_LAYER_NAME: &str = "ESRI World Imagery";
pub const EARTHQUAKE_LAYER_ID: &str = "earthquakes";
pub const EARTHQUAKE_LAYER_NAME: &str = "Earthquakes";

/// Legend caption.
pub const LEGEND_TITLE: &str = "Depth of Earthquake";

/// CSS classes of the legend container.
pub const LEGEND_CLASS: &str = "info legend";

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;
