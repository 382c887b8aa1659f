//! Map view configuration.

use crate::Coordinate;

/// Zoom level of the landing page map.
pub const LANDING_ZOOM: u32 = 4;

/// Settings a map view is constructed with.
///
/// The default value is the landing page configuration: centered on
/// [`Coordinate::ULURU`] at zoom level [`LANDING_ZOOM`] with every interactive
/// control switched off.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapViewConfig {
    /// Zoom level, `0` being the whole world.
    pub zoom: u32,
    /// Center of the initial view.
    pub center: Coordinate,
    /// Show zoom in/out buttons.
    pub zoom_control_visible: bool,
    /// Show the scale indicator.
    pub scale_control_visible: bool,
    /// Show the street view entry point.
    pub street_view_control_visible: bool,
    /// Zoom the map with the mouse wheel.
    pub scroll_to_zoom_enabled: bool,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            zoom: LANDING_ZOOM,
            center: Coordinate::ULURU,
            zoom_control_visible: false,
            scale_control_visible: false,
            street_view_control_visible: false,
            scroll_to_zoom_enabled: false,
        }
    }
}
