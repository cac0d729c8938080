//! Face-culling override node

use std::str::FromStr;

use super::render_state::{CullFaceState, CulledFace, FaceWinding, RenderState};
use super::{SceneError, SceneNode};

/// Face-culling mode for a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullFaceMode {
    /// Cull front faces
    Front,
    /// Cull back faces
    Back,
    /// Disable face culling
    None,
}

impl CullFaceMode {
    /// The cull-face configuration this mode installs for its subtree
    ///
    /// Winding is always counter-clockwise; the disabled mode still pins the
    /// culled face to Back so the installed state is deterministic.
    pub fn to_state(self) -> CullFaceState {
        match self {
            Self::Front => CullFaceState::new(true, FaceWinding::Ccw, CulledFace::Front),
            Self::Back => CullFaceState::new(true, FaceWinding::Ccw, CulledFace::Back),
            Self::None => CullFaceState::new(false, FaceWinding::Ccw, CulledFace::Back),
        }
    }
}

impl FromStr for CullFaceMode {
    type Err = SceneError;

    // "cw" aliases front and "ccw" aliases back, kept as-is for script
    // compatibility.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "front" | "cw" => Ok(Self::Front),
            "back" | "ccw" => Ok(Self::Back),
            "none" => Ok(Self::None),
            _ => Err(SceneError::UnknownCullFaceMode(token.to_string())),
        }
    }
}

/// Decorator node that overrides face culling for its subtree
///
/// Installs the configuration mapped from its mode, renders its children in
/// order under that configuration, and restores the previous configuration
/// before returning.
pub struct CullFaceNode {
    mode: CullFaceMode,
    children: Vec<Box<dyn SceneNode>>,
}

impl CullFaceNode {
    /// Create a node with the given mode
    pub fn new(mode: CullFaceMode) -> Self {
        Self {
            mode,
            children: Vec::new(),
        }
    }

    /// Create a node from a mode token (`front`, `cw`, `back`, `ccw`, `none`)
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownCullFaceMode`] for any other token.
    pub fn from_token(token: &str) -> Result<Self, SceneError> {
        Ok(Self::new(token.parse()?))
    }

    /// The current mode
    pub fn mode(&self) -> CullFaceMode {
        self.mode
    }

    /// Change the mode; takes effect on the next render
    pub fn set_mode(&mut self, mode: CullFaceMode) {
        self.mode = mode;
    }

    /// Append a child; children render in insertion order
    pub fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    /// Builder-style variant of [`CullFaceNode::add_child`]
    #[must_use]
    pub fn with_child(mut self, child: Box<dyn SceneNode>) -> Self {
        self.add_child(child);
        self
    }
}

impl SceneNode for CullFaceNode {
    fn render(&self, state: &mut RenderState) {
        state.with_cull_face(self.mode.to_state(), |state| {
            self.render_children(state);
        });
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }
}
