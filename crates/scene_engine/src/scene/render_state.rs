//! Shared render state threaded through traversal
//!
//! The state is an explicit value passed by `&mut` down the render call
//! chain, never a hidden global. Nodes that override part of it must capture
//! the live value first and restore it on every exit path, which
//! [`RenderState::with_cull_face`] guarantees.

use crate::config::TraversalConfig;
use crate::params::ParamRegistry;
use crate::spatial::Frustum;

/// Polygon winding convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    /// Clockwise
    Cw,
    /// Counter-clockwise
    Ccw,
}

/// Which face is discarded during rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CulledFace {
    /// Discard front faces
    Front,
    /// Discard back faces
    Back,
}

/// Snapshot of the active face-culling configuration
///
/// A plain value type: saving it is a copy, restoring overwrites the live
/// state with the saved copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CullFaceState {
    /// Whether face culling is enabled at all
    pub enabled: bool,
    /// Winding convention that defines the front face
    pub winding: FaceWinding,
    /// Which face is discarded (ignored while disabled, kept for determinism)
    pub face: CulledFace,
}

impl Default for CullFaceState {
    fn default() -> Self {
        Self {
            enabled: false,
            winding: FaceWinding::Ccw,
            face: CulledFace::Back,
        }
    }
}

impl CullFaceState {
    /// Create a new cull-face configuration
    pub fn new(enabled: bool, winding: FaceWinding, face: CulledFace) -> Self {
        Self {
            enabled,
            winding,
            face,
        }
    }

    /// Overwrite the live configuration in place
    pub fn set(&mut self, enabled: bool, winding: FaceWinding, face: CulledFace) {
        self.enabled = enabled;
        self.winding = winding;
        self.face = face;
    }

    /// Overwrite the live configuration with a previously captured copy
    pub fn restore(&mut self, saved: &Self) {
        *self = *saved;
    }
}

/// The rendering configuration active during a traversal
///
/// Owned by the rendering context and passed into
/// [`SceneNode::render`](crate::scene::SceneNode::render) by `&mut`. The
/// registry and frustum are
/// updated by the embedding code between frames; during a traversal they are
/// only read. Concurrent traversal of the same tree is unsupported: one
/// traversal runs to completion before the next starts.
#[derive(Debug)]
pub struct RenderState {
    /// The face-culling configuration currently in effect
    pub active_cull_face: CullFaceState,
    /// The view frustum used for visibility tests this frame
    pub frustum: Frustum,
    /// Named shader parameters, resolved by nodes at render time
    pub params: ParamRegistry,
    /// Traversal tuning options
    pub config: TraversalConfig,
}

impl RenderState {
    /// Create a render state with default cull-face state and traversal config
    pub fn new(frustum: Frustum, params: ParamRegistry) -> Self {
        Self {
            active_cull_face: CullFaceState::default(),
            frustum,
            params,
            config: TraversalConfig::default(),
        }
    }

    /// Create a render state with an explicit traversal config
    pub fn with_config(frustum: Frustum, params: ParamRegistry, config: TraversalConfig) -> Self {
        Self {
            config,
            ..Self::new(frustum, params)
        }
    }

    /// Run `f` with `config` installed as the live cull-face state
    ///
    /// Captures the live state, installs the override, and restores the
    /// capture after `f` returns, on every exit path including early returns
    /// inside `f`. Overrides therefore nest strictly: the one installed here
    /// is visible exactly to the work done inside `f`, and restoration is
    /// LIFO in nesting depth.
    pub fn with_cull_face<R>(
        &mut self,
        config: CullFaceState,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.active_cull_face;
        self.active_cull_face = config;
        let result = f(self);
        self.active_cull_face.restore(&saved);
        result
    }
}
