//! Bounding-sphere culling node

use log::warn;

use super::render_state::RenderState;
use super::{SceneError, SceneNode};
use crate::foundation::math::{Mat4, Point3};
use crate::params::ParamValue;
use crate::spatial::sphere_visible;

/// Decorator node that renders its subtree only if a bounding sphere is visible
///
/// Each frame the node composes a transform from one or more named registry
/// parameters and tests its bounding sphere against the view frustum under
/// that transform. Parameters are looked up at render time, so the test
/// always reflects the registry's current values. An invisible sphere prunes
/// the whole subtree for the frame with no further side effects.
///
/// The node never touches the shared cull-face state; it only gates
/// traversal.
pub struct CullSphereNode {
    names: Vec<String>,
    center: Point3,
    radius: f32,
    children: Vec<Box<dyn SceneNode>>,
}

impl CullSphereNode {
    /// Create a node with the sphere centered at the local origin
    ///
    /// `names` are composed left to right into the culling transform.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NoParamNames`] if `names` is empty.
    pub fn new(names: Vec<String>, radius: f32) -> Result<Self, SceneError> {
        Self::with_center(names, radius, Point3::origin())
    }

    /// Create a node with an explicit local-space center
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NoParamNames`] if `names` is empty.
    pub fn with_center(
        names: Vec<String>,
        radius: f32,
        center: Point3,
    ) -> Result<Self, SceneError> {
        if names.is_empty() {
            return Err(SceneError::NoParamNames);
        }
        Ok(Self {
            names,
            center,
            radius,
            children: Vec::new(),
        })
    }

    /// The parameter names composed into the culling transform, in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The sphere radius in local space
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Change the sphere radius
    ///
    /// No validation is performed; a negative radius makes the subtree
    /// permanently invisible (see
    /// [`sphere_visible`](crate::spatial::sphere_visible)).
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// The sphere center in local space
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Change the sphere center
    pub fn set_center(&mut self, center: Point3) {
        self.center = center;
    }

    /// Append a child; children render in insertion order
    pub fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    /// Builder-style variant of [`CullSphereNode::add_child`]
    #[must_use]
    pub fn with_child(mut self, child: Box<dyn SceneNode>) -> Self {
        self.add_child(child);
        self
    }
}

impl SceneNode for CullSphereNode {
    fn render(&self, state: &mut RenderState) {
        let mut matrix = Mat4::identity();
        for name in &self.names {
            match state.params.lookup(name) {
                Some(ParamValue::Mat4(value)) => matrix *= *value,
                Some(value) => {
                    warn!(
                        "parameter '{}' is not a mat4 in cull_sphere node (got {}, subtree culled)",
                        name,
                        value.type_name()
                    );
                    return;
                }
                None => {
                    warn!(
                        "parameter '{}' is not set in cull_sphere node (subtree culled)",
                        name
                    );
                    return;
                }
            }
        }
        if state.config.enable_frustum_culling
            && !sphere_visible(&state.frustum, &matrix, self.center, self.radius)
        {
            return;
        }
        self.render_children(state);
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }
}
