//! Bounding-sphere visibility test

use crate::foundation::math::{max_scale_factor, Mat4, Point3};
use crate::spatial::Frustum;

/// Test whether a transformed bounding sphere can be visible in the frustum
///
/// The sphere `(center, radius)` is given in local space; `transform` is the
/// composed local-to-clip matrix for the subtree it bounds. The center is
/// transformed directly, while the radius is multiplied by the transform's
/// conservative scale bound (see
/// [`max_scale_factor`](crate::foundation::math::max_scale_factor)), so the
/// test never rejects geometry that could be visible under non-uniform scale.
///
/// A negative radius is treated as an empty bound and is never visible.
///
/// This is a pure function of its inputs and is evaluated once per frame for
/// each culled subtree, so it stays allocation-free.
pub fn sphere_visible(frustum: &Frustum, transform: &Mat4, center: Point3, radius: f32) -> bool {
    if radius < 0.0 {
        return false;
    }
    let world_center = transform.transform_point(&center);
    let world_radius = max_scale_factor(transform) * radius;
    frustum.intersects_sphere(world_center, world_radius)
}
