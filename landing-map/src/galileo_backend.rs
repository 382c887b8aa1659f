//! [`MapLibrary`] implemented with the Galileo rendering engine.

use std::sync::{Arc, Weak};

use galileo::control::{EventPropagation, UserEvent, UserEventHandler};
use galileo::error::GalileoError;
use galileo::galileo_types::cartesian::Size;
use galileo::galileo_types::geo::impls::GeoPoint2d;
use galileo::galileo_types::geo::{Crs, NewGeoPoint};
use galileo::layer::feature_layer::Feature;
use galileo::layer::raster_tile_layer::RasterTileLayerBuilder;
use galileo::layer::FeatureLayer;
use galileo::symbol::CirclePointSymbol;
use galileo::{Color, Map, MapBuilder};
use parking_lot::RwLock;

use crate::library::{MapLibrary, MarkerOptions};
use crate::surface::MapSurface;
use crate::{Coordinate, MapViewConfig};

const MARKER_SIZE: f64 = 12.0;

impl From<Coordinate> for GeoPoint2d {
    fn from(value: Coordinate) -> Self {
        GeoPoint2d::latlon(value.latitude(), value.longitude())
    }
}

/// Creates Galileo maps with an OpenStreetMap base layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct GalileoLibrary;

impl GalileoLibrary {
    /// Creates the library handle.
    pub fn new() -> Self {
        Self
    }
}

/// Galileo map created for a surface.
pub struct GalileoMapView {
    map: Arc<RwLock<Map>>,
    surface: MapSurface,
    config: MapViewConfig,
}

impl GalileoMapView {
    /// Shared handle to the underlying map.
    pub fn map(&self) -> &Arc<RwLock<Map>> {
        &self.map
    }

    /// Surface the map renders into.
    pub fn surface(&self) -> &MapSurface {
        &self.surface
    }

    /// Configuration the view was created with.
    pub fn config(&self) -> &MapViewConfig {
        &self.config
    }

    /// Event handlers enforcing the control flags of this view.
    ///
    /// They must be installed before the default map controller.
    pub fn control_handlers(&self) -> Vec<Box<dyn UserEventHandler>> {
        vec![Box::new(ScrollZoomGuard::new(
            self.config.scroll_to_zoom_enabled,
        ))]
    }

    /// Releases the map for a host that takes ownership of it, such as an egui window.
    ///
    /// Returns `None` if another strong handle to the map is still alive.
    pub fn into_map(self) -> Option<Map> {
        Arc::try_unwrap(self.map).ok().map(RwLock::into_inner)
    }
}

/// Marker layer placed on a [`GalileoMapView`].
pub struct GalileoMarker {
    position: Coordinate,
    map: Weak<RwLock<Map>>,
}

impl GalileoMarker {
    /// Marker position.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Map the marker is shown on, if it is still alive.
    pub fn map(&self) -> Option<Arc<RwLock<Map>>> {
        self.map.upgrade()
    }
}

struct MarkerFeature {
    point: GeoPoint2d,
}

impl Feature for MarkerFeature {
    type Geom = GeoPoint2d;

    fn geometry(&self) -> &Self::Geom {
        &self.point
    }
}

impl MapLibrary for GalileoLibrary {
    type Surface = MapSurface;
    type MapView = GalileoMapView;
    type Marker = GalileoMarker;
    type Error = GalileoError;

    fn create_map_view(
        &self,
        surface: MapSurface,
        config: &MapViewConfig,
    ) -> Result<GalileoMapView, GalileoError> {
        let base_layer = RasterTileLayerBuilder::new_osm().build()?;

        let mut map = MapBuilder::default()
            .with_latlon(config.center.latitude(), config.center.longitude())
            .with_z_level(config.zoom)
            .with_layer(base_layer)
            .build();
        map.set_size(Size::new(surface.width() as f64, surface.height() as f64));

        log::debug!(
            "Created galileo map for surface `{}` ({}x{})",
            surface.id(),
            surface.width(),
            surface.height()
        );

        Ok(GalileoMapView {
            map: Arc::new(RwLock::new(map)),
            surface,
            config: *config,
        })
    }

    fn create_marker(
        &self,
        options: MarkerOptions<'_, GalileoMapView>,
    ) -> Result<GalileoMarker, GalileoError> {
        let layer = FeatureLayer::new(
            vec![MarkerFeature {
                point: options.position.into(),
            }],
            CirclePointSymbol::new(Color::RED, MARKER_SIZE),
            Crs::WGS84,
        );
        options.map_view.map.write().layers_mut().push(layer);

        Ok(GalileoMarker {
            position: options.position,
            map: Arc::downgrade(&options.map_view.map),
        })
    }
}

/// Consumes scroll events so the map controller does not zoom on the mouse wheel.
#[derive(Debug, Clone, Copy)]
pub struct ScrollZoomGuard {
    enabled: bool,
}

impl ScrollZoomGuard {
    /// Lets scroll events through only if `scroll_to_zoom_enabled` is set.
    pub fn new(scroll_to_zoom_enabled: bool) -> Self {
        Self {
            enabled: scroll_to_zoom_enabled,
        }
    }

    fn propagation(&self, event: &UserEvent) -> EventPropagation {
        match event {
            UserEvent::Scroll(..) if !self.enabled => EventPropagation::Consume,
            _ => EventPropagation::Propagate,
        }
    }
}

impl UserEventHandler for ScrollZoomGuard {
    fn handle(&self, event: &UserEvent, _map: &mut Map) -> EventPropagation {
        self.propagation(event)
    }
}
