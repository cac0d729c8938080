//! Whole-tree traversal tests
//!
//! Exercises complete trees of culling decorators and recording leaves:
//! state restoration at depth, visibility gating, sibling isolation, and
//! determinism across repeated renders.

use super::test_support::{test_state, RecordingLeaf, RenderLog};
use super::*;
use crate::foundation::math::{Mat4, Vec3};
use crate::params::ParamValue;

#[test]
fn test_cull_face_over_cull_sphere_scenario() {
    // CullFace(Back) -> CullSphere(["view_proj"], r = 1) -> leaf, with an
    // identity view-projection and the unit-cube frustum: the leaf renders
    // under back-face culling, and the state is restored afterwards.
    let log = RenderLog::default();
    let sphere = CullSphereNode::new(vec!["view_proj".to_string()], 1.0)
        .expect("one name")
        .with_child(RecordingLeaf::boxed("leaf", &log));
    let root = CullFaceNode::new(CullFaceMode::Back).with_child(Box::new(sphere));

    let mut state = test_state();
    state
        .params
        .set("view_proj", ParamValue::Mat4(Mat4::identity()));
    let initial = state.active_cull_face;
    root.render(&mut state);

    assert_eq!(
        log.entries(),
        vec![(
            "leaf".to_string(),
            CullFaceState::new(true, FaceWinding::Ccw, CulledFace::Back)
        )]
    );
    assert_eq!(state.active_cull_face, initial);
}

#[test]
fn test_state_restored_for_any_initial_state() {
    let initial_states = [
        CullFaceState::default(),
        CullFaceState::new(true, FaceWinding::Cw, CulledFace::Front),
        CullFaceState::new(true, FaceWinding::Ccw, CulledFace::Back),
        CullFaceState::new(false, FaceWinding::Cw, CulledFace::Front),
    ];

    for initial in initial_states {
        let log = RenderLog::default();
        let inner = CullFaceNode::new(CullFaceMode::None)
            .with_child(RecordingLeaf::boxed("deep", &log));
        let root = CullFaceNode::new(CullFaceMode::Front)
            .with_child(Box::new(inner))
            .with_child(RecordingLeaf::boxed("shallow", &log));

        let mut state = test_state();
        state.active_cull_face = initial;
        root.render(&mut state);

        assert_eq!(state.active_cull_face, initial);
    }
}

#[test]
fn test_nested_overrides_restore_lifo() {
    let log = RenderLog::default();
    let inner =
        CullFaceNode::new(CullFaceMode::None).with_child(RecordingLeaf::boxed("inner", &log));
    let root = CullFaceNode::new(CullFaceMode::Front)
        .with_child(RecordingLeaf::boxed("before", &log))
        .with_child(Box::new(inner))
        .with_child(RecordingLeaf::boxed("after", &log));

    let mut state = test_state();
    root.render(&mut state);

    let front = CullFaceState::new(true, FaceWinding::Ccw, CulledFace::Front);
    let none = CullFaceState::new(false, FaceWinding::Ccw, CulledFace::Back);
    assert_eq!(
        log.entries(),
        vec![
            ("before".to_string(), front),
            ("inner".to_string(), none),
            // The sibling after the nested override sees the outer state again.
            ("after".to_string(), front),
        ]
    );
}

#[test]
fn test_type_mismatch_leaves_siblings_and_ancestors_unaffected() {
    let log = RenderLog::default();
    let bad_sphere = CullSphereNode::new(vec!["bad".to_string()], 1.0)
        .expect("one name")
        .with_child(RecordingLeaf::boxed("culled", &log));
    let root = CullFaceNode::new(CullFaceMode::Back)
        .with_child(Box::new(bad_sphere))
        .with_child(RecordingLeaf::boxed("sibling", &log));

    let mut state = test_state();
    state.params.set("bad", ParamValue::Vec3(Vec3::zeros()));
    let initial = state.active_cull_face;
    root.render(&mut state);

    // The mismatched subtree vanished for the frame; its sibling still
    // rendered under the ancestor's override, which was then restored.
    assert_eq!(
        log.entries(),
        vec![(
            "sibling".to_string(),
            CullFaceState::new(true, FaceWinding::Ccw, CulledFace::Back)
        )]
    );
    assert_eq!(state.active_cull_face, initial);
}

#[test]
fn test_culled_sphere_produces_no_side_effects() {
    let log = RenderLog::default();
    let sphere = CullSphereNode::new(vec!["model".to_string()], 1.0)
        .expect("one name")
        .with_child(RecordingLeaf::boxed("hidden", &log));
    let root = GroupNode::new()
        .with_child(Box::new(sphere))
        .with_child(RecordingLeaf::boxed("visible", &log));

    let mut state = test_state();
    state.params.set(
        "model",
        ParamValue::Mat4(Mat4::new_translation(&Vec3::new(50.0, 0.0, 0.0))),
    );
    root.render(&mut state);

    assert_eq!(log.labels(), vec!["visible"]);
}

#[test]
fn test_repeated_renders_are_deterministic() {
    let log = RenderLog::default();
    let near = CullSphereNode::new(vec!["near".to_string()], 1.0)
        .expect("one name")
        .with_child(RecordingLeaf::boxed("near", &log));
    let far = CullSphereNode::new(vec!["far".to_string()], 1.0)
        .expect("one name")
        .with_child(RecordingLeaf::boxed("far", &log));
    let root = CullFaceNode::new(CullFaceMode::Front)
        .with_child(Box::new(near))
        .with_child(Box::new(far));

    let mut state = test_state();
    state.params.set("near", ParamValue::Mat4(Mat4::identity()));
    state.params.set(
        "far",
        ParamValue::Mat4(Mat4::new_translation(&Vec3::new(0.0, 0.0, 100.0))),
    );

    root.render(&mut state);
    let first = log.entries();
    let first_state = state.active_cull_face;

    log.clear();
    root.render(&mut state);

    assert_eq!(log.entries(), first);
    assert_eq!(state.active_cull_face, first_state);
}
