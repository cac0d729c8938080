//! Scene node trait and plain container node

use super::render_state::RenderState;

/// A unit of the render tree
///
/// Nodes own their children exclusively (a child has exactly one parent, so
/// no cycles can form) and visit them strictly in insertion order: traversal
/// is pre-order, depth-first, and deterministic. A node that overrides shared
/// render state must restore it before returning; use
/// [`RenderState::with_cull_face`] so restoration holds on every exit path.
pub trait SceneNode {
    /// Render this node and, depending on its kind, its subtree
    ///
    /// The call runs to completion before returning: all descendant renders
    /// and all state restorations happen inside it.
    fn render(&self, state: &mut RenderState);

    /// The node's children, in traversal order
    fn children(&self) -> &[Box<dyn SceneNode>];

    /// Render all children in order under the current state
    fn render_children(&self, state: &mut RenderState) {
        for child in self.children() {
            child.render(state);
        }
    }
}

/// Plain container node
///
/// Renders its children under the inherited state, unchanged. Useful as a
/// traversal root and for grouping subtrees under a shared decorator.
#[derive(Default)]
pub struct GroupNode {
    children: Vec<Box<dyn SceneNode>>,
}

impl GroupNode {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child; children render in insertion order
    pub fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    /// Builder-style variant of [`GroupNode::add_child`]
    #[must_use]
    pub fn with_child(mut self, child: Box<dyn SceneNode>) -> Self {
        self.add_child(child);
        self
    }
}

impl SceneNode for GroupNode {
    fn render(&self, state: &mut RenderState) {
        self.render_children(state);
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }
}
