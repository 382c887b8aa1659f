//! Lookup of the region a map is rendered into.

use std::collections::HashMap;

/// Region of the page or window a map view renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSurface {
    id: String,
    width: u32,
    height: u32,
}

impl MapSurface {
    /// Creates a surface description.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    /// Identifier the surface is registered under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Environment that can resolve a surface by its identifier.
pub trait SurfaceHost {
    /// Handle type of the resolved surface.
    type Surface;

    /// Returns the surface with the given id, or `None` if the host has none.
    fn find_surface(&self, id: &str) -> Option<Self::Surface>;
}

/// In-memory surface host for native windows and tests.
#[derive(Debug, Default, Clone)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, MapSurface>,
}

impl SurfaceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a surface, replacing any surface with the same id.
    pub fn register(&mut self, surface: MapSurface) {
        log::debug!("Registering surface `{}`", surface.id());
        self.surfaces.insert(surface.id.clone(), surface);
    }

    /// Builder-style version of [`SurfaceRegistry::register`].
    pub fn with_surface(mut self, surface: MapSurface) -> Self {
        self.register(surface);
        self
    }
}

impl SurfaceHost for SurfaceRegistry {
    type Surface = MapSurface;

    fn find_surface(&self, id: &str) -> Option<MapSurface> {
        self.surfaces.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_registered_surface() {
        let registry = SurfaceRegistry::new().with_surface(MapSurface::new("map", 800, 600));

        let surface = registry.find_surface("map").expect("surface is registered");
        assert_eq!(surface.width(), 800);
        assert_eq!(surface.height(), 600);
        assert!(registry.find_surface("other").is_none());
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = SurfaceRegistry::new();
        registry.register(MapSurface::new("map", 1, 1));
        registry.register(MapSurface::new("map", 2, 3));

        assert_eq!(registry.find_surface("map"), Some(MapSurface::new("map", 2, 3)));
    }
}
