mod geometry;
pub mod projection;
mod renderer;
mod tiles;
mod viewport;

pub use geometry::{Bounds, Country, Geometry, Point, SelectionSet};
pub use projection::ScaleFactor;
pub use renderer::{CompoundPath, MapStyle, PaintStyle, Surface, WorldRenderer};
pub use tiles::{LevelOfDetail, SurfaceRect, Tile, TileConfig, TileKey, TileRegion, TileSet};
pub use viewport::Viewport;
