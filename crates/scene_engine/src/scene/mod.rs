//! Scene traversal system
//!
//! Provides the render-tree node contract and the state-scoping and culling
//! decorators that gate traversal. Following the classic scene-graph model:
//! a tree of nodes is rendered once per frame, ancestors establish scoped
//! rendering state or prune whole subtrees, and children are visited strictly
//! in insertion order.
//!
//! ## Architecture
//!
//! ```text
//! RenderState (cull-face state, frustum, parameter registry)
//!      |
//!      v  &mut, threaded through the traversal
//! SceneNode::render
//!      |- CullFaceNode    overrides face culling for its subtree, restores after
//!      |- CullSphereNode  renders its subtree only if a bounding sphere is visible
//!      `- GroupNode       renders children under the inherited state unchanged
//! ```
//!
//! State overrides follow a strict stack discipline without an explicit stack
//! data structure: a node's override is visible only to its own subtree and is
//! fully undone before control returns to the node's parent (see
//! [`RenderState::with_cull_face`]). Traversal is single-threaded and runs to
//! completion; no suspension points exist inside a `render` call.

mod cull_face;
mod cull_sphere;
mod node;
mod render_state;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use cull_face::{CullFaceMode, CullFaceNode};
pub use cull_sphere::CullSphereNode;
pub use node::{GroupNode, SceneNode};
pub use render_state::{CullFaceState, CulledFace, FaceWinding, RenderState};

use thiserror::Error;

/// Errors raised while constructing scene nodes
///
/// Construction-time configuration errors are fatal to the constructing call
/// only; they never corrupt shared render state. Runtime conditions (a
/// parameter holding the wrong type, a culled subtree) are not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The culling-mode token did not name a known mode
    #[error("unknown cull face mode '{0}' (expected front, cw, back, ccw or none)")]
    UnknownCullFaceMode(String),

    /// A cull-sphere node was constructed without any parameter names
    #[error("cull sphere node requires at least one parameter name")]
    NoParamNames,
}
