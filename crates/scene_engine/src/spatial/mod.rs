//! Spatial queries for visibility culling
//!
//! Provides the view-frustum representation and the pure bounding-sphere
//! visibility test used by the scene layer. Nothing here holds hidden state;
//! the frustum is plain data supplied by the rendering context each frame.

mod frustum;
mod visibility;

pub use frustum::{Frustum, Plane};
pub use visibility::sphere_visible;
