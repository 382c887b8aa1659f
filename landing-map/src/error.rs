use std::error::Error;

use thiserror::Error;

/// Boxed error coming from a map library implementation.
pub type LibraryError = Box<dyn Error + Send + Sync + 'static>;

/// Error returned when the map cannot be bootstrapped.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Host has no surface with the given id.
    #[error("surface element `{id}` is not present")]
    SurfaceNotFound {
        /// Id that was looked up.
        id: String,
    },

    /// Map library was never signaled as loaded.
    #[error("map library is not available")]
    LibraryUnavailable,

    /// Library failed to construct the map view.
    #[error("failed to construct map view")]
    MapView(#[source] LibraryError),

    /// Library failed to construct the marker.
    #[error("failed to construct marker")]
    Marker(#[source] LibraryError),
}
