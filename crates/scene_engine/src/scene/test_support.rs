//! Shared helpers for scene traversal tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::math::Mat4;
use crate::params::ParamRegistry;
use crate::scene::{CullFaceState, RenderState, SceneNode};
use crate::spatial::Frustum;

/// Shared record of leaf renders: label plus the cull-face state in effect.
#[derive(Clone, Default)]
pub(crate) struct RenderLog {
    entries: Rc<RefCell<Vec<(String, CullFaceState)>>>,
}

impl RenderLog {
    pub(crate) fn push(&self, label: &str, cull_face: CullFaceState) {
        self.entries
            .borrow_mut()
            .push((label.to_string(), cull_face));
    }

    pub(crate) fn labels(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }

    pub(crate) fn entries(&self) -> Vec<(String, CullFaceState)> {
        self.entries.borrow().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub(crate) fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Leaf node that records each render and the state it saw.
pub(crate) struct RecordingLeaf {
    label: String,
    log: RenderLog,
}

impl RecordingLeaf {
    pub(crate) fn boxed(label: &str, log: &RenderLog) -> Box<dyn SceneNode> {
        Box::new(Self {
            label: label.to_string(),
            log: log.clone(),
        })
    }
}

impl SceneNode for RecordingLeaf {
    fn render(&self, state: &mut RenderState) {
        self.log.push(&self.label, state.active_cull_face);
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &[]
    }
}

/// Render state over the unit-cube frustum with an empty registry.
pub(crate) fn test_state() -> RenderState {
    RenderState::new(
        Frustum::from_view_projection(&Mat4::identity()),
        ParamRegistry::new(),
    )
}
