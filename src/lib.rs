//! World map rendering: parse country boundaries from a GeoJSON feature
//! collection and paint them into level-of-detail tiles, filling each country
//! according to whether it is in the current selection.

pub mod data;
pub mod map;

pub use data::{catalog, load_countries, parse};
pub use map::{Country, Geometry, MapStyle, SelectionSet, TileConfig, Viewport, WorldRenderer};
