//! Flyby culling demo
//!
//! Builds a scene of sphere-bounded objects (an asteroid ring plus a rotating
//! station with attached modules), then orbits a camera around it for a fixed
//! number of frames. Each frame the view frustum and the transform parameters
//! are republished and the tree is re-rendered; the log shows how many draw
//! leaves survived culling.

use std::cell::Cell;
use std::f32::consts::{FRAC_PI_3, TAU};
use std::rc::Rc;
use std::time::Instant;

use scene_engine::prelude::*;

const ASTEROID_COUNT: usize = 24;
const MODULE_COUNT: usize = 6;
const FRAME_COUNT: usize = 60;
const ORBIT_RADIUS: f32 = 30.0;

/// Stand-in for a draw-command leaf: bumps a shared counter when rendered.
struct DrawCall {
    label: String,
    drawn: Rc<Cell<usize>>,
}

impl DrawCall {
    fn boxed(label: String, drawn: &Rc<Cell<usize>>) -> Box<dyn SceneNode> {
        Box::new(Self {
            label,
            drawn: Rc::clone(drawn),
        })
    }
}

impl SceneNode for DrawCall {
    fn render(&self, state: &mut RenderState) {
        self.drawn.set(self.drawn.get() + 1);
        log::debug!(
            "draw {} (cull faces: {})",
            self.label,
            state.active_cull_face.enabled
        );
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &[]
    }
}

/// Ring of asteroids around the origin, each culled by its own sphere.
fn build_asteroid_ring(drawn: &Rc<Cell<usize>>) -> CullFaceNode {
    let mut ring = CullFaceNode::new(CullFaceMode::Back);
    for i in 0..ASTEROID_COUNT {
        let name = format!("asteroid_{i}");
        let sphere = CullSphereNode::new(vec![name.clone()], 1.5)
            .expect("asteroid node has a parameter name")
            .with_child(DrawCall::boxed(name, drawn));
        ring.add_child(Box::new(sphere));
    }
    ring
}

/// Station with modules hanging off it; module transforms compose with the
/// station transform, so the whole assembly spins as one rigid body.
fn build_station(drawn: &Rc<Cell<usize>>) -> CullSphereNode {
    let mut station = CullSphereNode::new(vec!["station".to_string()], 8.0)
        .expect("station node has a parameter name");
    for i in 0..MODULE_COUNT {
        let name = format!("module_{i}");
        let module = CullSphereNode::new(vec!["station".to_string(), name.clone()], 1.0)
            .expect("module node has parameter names")
            .with_child(DrawCall::boxed(name, drawn));
        station.add_child(Box::new(module));
    }
    station
}

fn publish_static_params(params: &mut ParamRegistry) {
    for i in 0..ASTEROID_COUNT {
        let angle = TAU * (i as f32) / (ASTEROID_COUNT as f32);
        let position = Vec3::new(angle.cos() * 18.0, (i % 5) as f32 - 2.0, angle.sin() * 18.0);
        params.set(
            format!("asteroid_{i}"),
            ParamValue::Mat4(Mat4::new_translation(&position)),
        );
    }
    for i in 0..MODULE_COUNT {
        let angle = TAU * (i as f32) / (MODULE_COUNT as f32);
        let offset = Vec3::new(angle.cos() * 5.0, 0.0, angle.sin() * 5.0);
        params.set(
            format!("module_{i}"),
            ParamValue::Mat4(Mat4::new_translation(&offset)),
        );
    }
}

fn main() {
    scene_engine::foundation::logging::init_with_default("info");
    log::info!("Building flyby scene...");

    let drawn = Rc::new(Cell::new(0usize));
    let root = GroupNode::new()
        .with_child(Box::new(build_asteroid_ring(&drawn)))
        .with_child(Box::new(build_station(&drawn)));
    let leaf_total = ASTEROID_COUNT + MODULE_COUNT;

    let mut params = ParamRegistry::new();
    publish_static_params(&mut params);

    let mut state = RenderState::new(Frustum::from_view_projection(&Mat4::identity()), params);
    log::info!(
        "Scene ready: {} draw leaves, {} registry parameters",
        leaf_total,
        state.params.len()
    );

    let proj = Mat4::perspective(FRAC_PI_3, 16.0 / 9.0, 0.1, 60.0);
    let start = Instant::now();
    let mut drawn_min = usize::MAX;
    let mut drawn_max = 0usize;

    for frame in 0..FRAME_COUNT {
        let t = (frame as f32) / (FRAME_COUNT as f32);

        // Orbit the camera and respin the station, then republish.
        let orbit = TAU * t;
        let eye = Vec3::new(orbit.cos() * ORBIT_RADIUS, 6.0, orbit.sin() * ORBIT_RADIUS);
        let view = Mat4::look_at(eye, Vec3::zeros(), Vec3::y());
        state.frustum = Frustum::from_view_projection(&(proj * view));
        state.params.set(
            "station",
            ParamValue::Mat4(Mat4::rotation_y(TAU * t * 2.0)),
        );

        drawn.set(0);
        root.render(&mut state);

        let count = drawn.get();
        drawn_min = drawn_min.min(count);
        drawn_max = drawn_max.max(count);
        log::info!("frame {frame:02}: drew {count}/{leaf_total} leaves");
    }

    log::info!(
        "Rendered {} frames in {:.2?} (drawn per frame: min {}, max {})",
        FRAME_COUNT,
        start.elapsed(),
        drawn_min,
        drawn_max
    );
}
