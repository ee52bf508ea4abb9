//! Depth classification shared by marker styling and the legend.
//!
//! `DEPTH_BANDS` is the single source of truth: half-open intervals
//! `[lower, upper)` in ascending order, the last one unbounded above.

use crate::ui::style::Color;

/// One depth interval and the color it is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBand {
    /// Inclusive lower bound in km
    pub lower_km: f64,
    /// Exclusive upper bound in km, `None` for the open-ended deepest band
    pub upper_km: Option<f64>,
    pub color: Color,
}

impl DepthBand {
    pub fn contains(&self, depth_km: f64) -> bool {
        depth_km >= self.lower_km && self.upper_km.map_or(true, |upper| depth_km < upper)
    }

    /// Legend label, e.g. `10 to 30 Km` or `Over 90 Km`
    pub fn label(&self) -> String {
        match self.upper_km {
            Some(upper) => format!("{} to {} Km", self.lower_km, upper),
            None => format!("Over {} Km", self.lower_km),
        }
    }
}

pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand {
        lower_km: -10.0,
        upper_km: Some(10.0),
        color: Color::rgb(0x52, 0xfd, 0x06),
    },
    DepthBand {
        lower_km: 10.0,
        upper_km: Some(30.0),
        color: Color::rgb(0xa2, 0xdc, 0x00),
    },
    DepthBand {
        lower_km: 30.0,
        upper_km: Some(50.0),
        color: Color::rgb(0xcf, 0xb8, 0x00),
    },
    DepthBand {
        lower_km: 50.0,
        upper_km: Some(70.0),
        color: Color::rgb(0xec, 0x8f, 0x00),
    },
    DepthBand {
        lower_km: 70.0,
        upper_km: Some(90.0),
        color: Color::rgb(0xfc, 0x5e, 0x00),
    },
    DepthBand {
        lower_km: 90.0,
        upper_km: None,
        color: Color::rgb(0xff, 0x08, 0x19),
    },
];

/// Band a depth falls into.
///
/// Depths matching no band (below -10 km, or NaN) fall through to the
/// deepest band, so the mapping is total.
pub fn band_for(depth_km: f64) -> &'static DepthBand {
    let fallback = &DEPTH_BANDS[DEPTH_BANDS.len() - 1];
    DEPTH_BANDS
        .iter()
        .find(|band| band.contains(depth_km))
        .unwrap_or(fallback)
}

/// Fill color for an event at `depth_km`
pub fn color_for(depth_km: f64) -> Color {
    band_for(depth_km).color
}
