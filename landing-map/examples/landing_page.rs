//! Opens the landing page map in a native window.
//! Run with: cargo run --example landing_page

use anyhow::Context;
use landing_map::galileo_backend::GalileoLibrary;
use landing_map::logging::init_logger;
use landing_map::surface::{MapSurface, SurfaceRegistry};
use landing_map::{readiness_channel, MapBootstrap, SURFACE_ID};

fn main() -> anyhow::Result<()> {
    init_logger();

    let (signal, ready) = readiness_channel();
    signal.signal(GalileoLibrary::new())?;
    let library = tokio_test::block_on(ready.wait())?;

    let host = SurfaceRegistry::new().with_surface(MapSurface::new(SURFACE_ID, 1024, 768));
    let init_map = MapBootstrap::new(library, host).entry_point();
    let placement = init_map()?;

    let handlers = placement.map_view.control_handlers();
    let map = placement
        .map_view
        .into_map()
        .context("map is still shared")?;

    galileo_egui::InitBuilder::new(map)
        .with_handlers(handlers)
        .init()
        .context("failed to initialize")?;

    Ok(())
}
