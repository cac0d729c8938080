//! # Scene Engine
//!
//! A scene-graph traversal library with scoped render state and
//! bounding-sphere visibility culling.
//!
//! ## Features
//!
//! - **Scene Nodes**: Polymorphic render tree with deterministic pre-order traversal
//! - **Scoped Render State**: Face-culling overrides that restore on every exit path
//! - **Sphere Culling**: Per-frame bounding-sphere tests against the view frustum
//! - **Parameter Registry**: Named transform parameters resolved at render time
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! // Upstream rendering setup publishes the current view-projection matrix.
//! let mut params = ParamRegistry::new();
//! params.set("view_proj", ParamValue::Mat4(Mat4::identity()));
//!
//! // Identity view-projection means the frustum is the unit cube.
//! let frustum = Frustum::from_view_projection(&Mat4::identity());
//! let mut state = RenderState::new(frustum, params);
//!
//! // Cull a subtree against a unit sphere at the origin.
//! let mut root = CullSphereNode::new(vec!["view_proj".to_string()], 1.0)
//!     .expect("at least one parameter name");
//! root.add_child(Box::new(GroupNode::new()));
//! root.render(&mut state);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod params;
pub mod scene;
pub mod spatial;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, TraversalConfig},
        foundation::math::{Mat4, Mat4Ext, Point3, Vec3},
        params::{ParamRegistry, ParamValue},
        scene::{
            CullFaceMode, CullFaceNode, CullFaceState, CullSphereNode, CulledFace, FaceWinding,
            GroupNode, RenderState, SceneError, SceneNode,
        },
        spatial::{sphere_visible, Frustum, Plane},
    };
}
