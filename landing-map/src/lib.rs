//! Landing page map built on [Galileo](https://docs.rs/galileo).
//!
//! [`MapBootstrap`] resolves the `"map"` surface, creates a map view centered on Uluru at
//! zoom level 4 with every interactive control switched off and places a single marker at
//! the center. The map library is reached through the [`MapLibrary`] trait and becomes
//! available to the bootstrap only after the loader fires the readiness handshake:
//!
//! ```ignore
//! use landing_map::galileo_backend::GalileoLibrary;
//! use landing_map::surface::{MapSurface, SurfaceRegistry};
//! use landing_map::{readiness_channel, run_when_ready};
//!
//! let (signal, ready) = readiness_channel();
//! signal.signal(GalileoLibrary::new())?;
//!
//! let host = SurfaceRegistry::new().with_surface(MapSurface::new("map", 1024, 768));
//! let _placement = tokio_test::block_on(run_when_ready(ready, host))?;
//! # Ok::<(), landing_map::BootstrapError>(())
//! ```

mod bootstrap;
mod config;
mod coordinate;
mod error;
pub mod galileo_backend;
pub mod library;
#[cfg(feature = "init")]
pub mod logging;
mod ready;
pub mod surface;

pub use bootstrap::{run_when_ready, MapBootstrap, Placement, SURFACE_ID};
pub use config::{MapViewConfig, LANDING_ZOOM};
pub use coordinate::Coordinate;
pub use error::{BootstrapError, LibraryError};
pub use library::{MapLibrary, MarkerOptions};
pub use ready::{readiness_channel, LibraryReady, Loaded, ReadySignal};
