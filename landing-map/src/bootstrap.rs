//! Landing page map initialization.

use crate::error::BootstrapError;
use crate::library::{MapLibrary, MarkerOptions};
use crate::ready::{LibraryReady, Loaded};
use crate::surface::SurfaceHost;
use crate::MapViewConfig;

/// Identifier of the surface the landing page map is rendered into.
pub const SURFACE_ID: &str = "map";

/// Map view and marker created by one [`MapBootstrap::init_map`] call.
pub struct Placement<L: MapLibrary> {
    /// Constructed map view.
    pub map_view: L::MapView,
    /// Marker placed at the map center.
    pub marker: L::Marker,
}

/// Creates the landing page map: one map view with all controls off and a single marker at
/// its center.
pub struct MapBootstrap<L, H> {
    library: Loaded<L>,
    host: H,
}

impl<L, H> MapBootstrap<L, H>
where
    L: MapLibrary,
    H: SurfaceHost<Surface = L::Surface>,
{
    /// Creates a bootstrap over a loaded library and a surface host.
    pub fn new(library: Loaded<L>, host: H) -> Self {
        Self { library, host }
    }

    /// The library maps are created with.
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Resolves the surface, then creates the map view and its marker.
    ///
    /// Nothing is constructed if the surface is missing. Every call creates a new
    /// independent map view and marker.
    pub fn init_map(&self) -> Result<Placement<L>, BootstrapError> {
        let surface =
            self.host
                .find_surface(SURFACE_ID)
                .ok_or_else(|| BootstrapError::SurfaceNotFound {
                    id: SURFACE_ID.to_string(),
                })?;

        let config = MapViewConfig::default();
        log::debug!("Creating map view with {config:?}");

        let map_view = self
            .library
            .create_map_view(surface, &config)
            .map_err(|err| BootstrapError::MapView(Box::new(err)))?;
        let marker = self
            .library
            .create_marker(MarkerOptions {
                position: config.center,
                map_view: &map_view,
            })
            .map_err(|err| BootstrapError::Marker(Box::new(err)))?;

        log::info!(
            "Map initialized at ({}, {}), zoom {}",
            config.center.latitude(),
            config.center.longitude(),
            config.zoom
        );

        Ok(Placement { map_view, marker })
    }

    /// Converts the bootstrap into the no-argument entry function handed to the page loader.
    pub fn entry_point(self) -> impl Fn() -> Result<Placement<L>, BootstrapError> {
        move || self.init_map()
    }
}

/// Waits for the library to be signaled ready, then initializes the map once.
pub async fn run_when_ready<L, H>(
    pending: LibraryReady<L>,
    host: H,
) -> Result<Placement<L>, BootstrapError>
where
    L: MapLibrary,
    H: SurfaceHost<Surface = L::Surface>,
{
    let library = pending.wait().await?;
    MapBootstrap::new(library, host).init_map()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt;
    use std::rc::{Rc, Weak};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::ready::readiness_channel;
    use crate::surface::{MapSurface, SurfaceRegistry};
    use crate::Coordinate;

    #[derive(Debug)]
    struct StubView {
        surface: MapSurface,
        config: MapViewConfig,
    }

    struct StubMarker {
        position: Coordinate,
        map_view: Weak<StubView>,
    }

    #[derive(Debug)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "stub failure")
        }
    }

    impl std::error::Error for StubError {}

    #[derive(Default)]
    struct Log {
        map_views: Vec<Rc<StubView>>,
        markers: usize,
    }

    #[derive(Default)]
    struct StubLibrary {
        log: Rc<RefCell<Log>>,
        fail_map_view: bool,
    }

    impl MapLibrary for StubLibrary {
        type Surface = MapSurface;
        type MapView = Rc<StubView>;
        type Marker = StubMarker;
        type Error = StubError;

        fn create_map_view(
            &self,
            surface: MapSurface,
            config: &MapViewConfig,
        ) -> Result<Self::MapView, StubError> {
            if self.fail_map_view {
                return Err(StubError);
            }

            let view = Rc::new(StubView {
                surface,
                config: *config,
            });
            self.log.borrow_mut().map_views.push(view.clone());
            Ok(view)
        }

        fn create_marker(
            &self,
            options: MarkerOptions<'_, Self::MapView>,
        ) -> Result<StubMarker, StubError> {
            self.log.borrow_mut().markers += 1;
            Ok(StubMarker {
                position: options.position,
                map_view: Rc::downgrade(options.map_view),
            })
        }
    }

    fn loaded(library: StubLibrary) -> Loaded<StubLibrary> {
        let (signal, ready) = readiness_channel();
        signal.signal(library).expect("waiter is alive");
        tokio_test::block_on(ready.wait()).expect("library is signaled")
    }

    fn page_with_map() -> SurfaceRegistry {
        SurfaceRegistry::new().with_surface(MapSurface::new(SURFACE_ID, 640, 480))
    }

    #[test]
    fn creates_one_view_at_uluru() {
        let bootstrap = MapBootstrap::new(loaded(StubLibrary::default()), page_with_map());
        let placement = bootstrap.init_map().expect("map is created");

        let log = bootstrap.library().log.borrow();
        assert_eq!(log.map_views.len(), 1);

        let view = &placement.map_view;
        assert_eq!(view.surface.id(), SURFACE_ID);
        assert_eq!(view.config.zoom, 4);
        assert_abs_diff_eq!(view.config.center.latitude(), -25.363);
        assert_abs_diff_eq!(view.config.center.longitude(), 131.044);
    }

    #[test]
    fn all_controls_are_disabled() {
        let bootstrap = MapBootstrap::new(loaded(StubLibrary::default()), page_with_map());
        let placement = bootstrap.init_map().expect("map is created");

        let config = placement.map_view.config;
        assert!(!config.zoom_control_visible);
        assert!(!config.scale_control_visible);
        assert!(!config.street_view_control_visible);
        assert!(!config.scroll_to_zoom_enabled);
    }

    #[test]
    fn marker_is_bound_to_view_center() {
        let bootstrap = MapBootstrap::new(loaded(StubLibrary::default()), page_with_map());
        let placement = bootstrap.init_map().expect("map is created");

        assert_eq!(bootstrap.library().log.borrow().markers, 1);
        assert_eq!(placement.marker.position, placement.map_view.config.center);

        let owner = placement
            .marker
            .map_view
            .upgrade()
            .expect("view is alive");
        assert!(Rc::ptr_eq(&owner, &placement.map_view));
    }

    #[test]
    fn marker_does_not_keep_view_alive() {
        let bootstrap = MapBootstrap::new(loaded(StubLibrary::default()), page_with_map());
        let Placement { map_view, marker } = bootstrap.init_map().expect("map is created");

        drop(map_view);
        bootstrap.library().log.borrow_mut().map_views.clear();
        assert!(marker.map_view.upgrade().is_none());
    }

    #[test]
    fn missing_surface_constructs_nothing() {
        let bootstrap = MapBootstrap::new(loaded(StubLibrary::default()), SurfaceRegistry::new());

        let result = bootstrap.init_map();
        assert!(
            matches!(result, Err(BootstrapError::SurfaceNotFound { ref id }) if id == SURFACE_ID)
        );

        let log = bootstrap.library().log.borrow();
        assert!(log.map_views.is_empty());
        assert_eq!(log.markers, 0);
    }

    #[test]
    fn map_view_failure_skips_marker() {
        let library = StubLibrary {
            fail_map_view: true,
            ..Default::default()
        };
        let bootstrap = MapBootstrap::new(loaded(library), page_with_map());

        assert!(matches!(
            bootstrap.init_map(),
            Err(BootstrapError::MapView(_))
        ));
        assert_eq!(bootstrap.library().log.borrow().markers, 0);
    }

    #[test]
    fn entry_point_is_not_idempotent() {
        let library = StubLibrary::default();
        let log = library.log.clone();
        let init_map = MapBootstrap::new(loaded(library), page_with_map()).entry_point();

        let first = init_map().expect("first call succeeds");
        let second = init_map().expect("second call succeeds");

        assert!(!Rc::ptr_eq(&first.map_view, &second.map_view));
        let second_owner = second.marker.map_view.upgrade().expect("view is alive");
        assert!(Rc::ptr_eq(&second_owner, &second.map_view));

        let log = log.borrow();
        assert_eq!(log.map_views.len(), 2);
        assert_eq!(log.markers, 2);
    }

    #[test]
    fn run_when_ready_waits_for_signal() {
        let library = StubLibrary::default();
        let log = library.log.clone();
        let (signal, ready) = readiness_channel();
        signal.signal(library).expect("waiter is alive");

        let placement =
            tokio_test::block_on(run_when_ready(ready, page_with_map())).expect("map is created");

        assert_eq!(placement.map_view.config, MapViewConfig::default());
        assert_eq!(log.borrow().markers, 1);
    }

    #[test]
    fn run_when_ready_fails_without_library() {
        let (signal, ready) = readiness_channel::<StubLibrary>();
        drop(signal);

        let result = tokio_test::block_on(run_when_ready(ready, page_with_map()));
        assert!(matches!(result, Err(BootstrapError::LibraryUnavailable)));
    }
}
