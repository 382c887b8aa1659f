//! Interface of the external map library the bootstrap drives.

use crate::{Coordinate, MapViewConfig};

/// Options a marker is created with.
#[derive(Debug)]
pub struct MarkerOptions<'a, V> {
    /// Where the marker is placed.
    pub position: Coordinate,
    /// Map view the marker is shown on. The marker must not take ownership of it.
    pub map_view: &'a V,
}

/// Map and marker constructors of a map rendering library.
///
/// Marker creation takes a reference to an existing map view, so a marker cannot be made
/// before its map view.
pub trait MapLibrary {
    /// Surface handle the map view is rendered into.
    type Surface;
    /// Constructed map view.
    type MapView;
    /// Constructed marker.
    type Marker;
    /// Error returned by the constructors.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a map view rendering into `surface`.
    fn create_map_view(
        &self,
        surface: Self::Surface,
        config: &MapViewConfig,
    ) -> Result<Self::MapView, Self::Error>;

    /// Creates a marker bound to `options.map_view`.
    fn create_marker(
        &self,
        options: MarkerOptions<'_, Self::MapView>,
    ) -> Result<Self::Marker, Self::Error>;
}
