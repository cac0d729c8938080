//! View-frustum representation and plane tests

use crate::foundation::math::{Mat4, Point3, Vec3};

/// Plane defined by normal and distance from origin
///
/// Points `p` with `normal . p + distance >= 0` are on the inside.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Normal vector (should be normalized)
    pub normal: Vec3,
    /// Distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from normal and distance
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalize(),
            distance,
        }
    }

    /// Create a plane from the raw coefficients of `ax + by + cz + d >= 0`
    ///
    /// The coefficients are rescaled so the normal has unit length, keeping
    /// signed distances in world units. A degenerate (zero) normal yields a
    /// plane that rejects nothing.
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let normal = Vec3::new(a, b, c);
        let length = normal.magnitude();
        if length > 0.0 {
            Self {
                normal: normal / length,
                distance: d / length,
            }
        } else {
            Self {
                normal: Vec3::zeros(),
                distance: 0.0,
            }
        }
    }

    /// Calculate signed distance from plane to point
    pub fn distance_to_point(&self, point: Point3) -> f32 {
        self.normal.dot(&point.coords) + self.distance
    }
}

/// Frustum for visibility culling
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six planes defining the frustum (left, right, bottom, top, near, far)
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Create a frustum from six planes
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extract frustum planes from a view-projection matrix
    ///
    /// Uses the Gribb-Hartmann method: each plane is a sum or difference of
    /// the matrix's fourth row with one of the others. Assumes a clip volume
    /// of `[-1, 1]` on all three axes, so the identity matrix yields the unit
    /// cube. Normals point inward.
    pub fn from_view_projection(matrix: &Mat4) -> Self {
        let row = |i: usize| {
            (
                matrix[(i, 0)],
                matrix[(i, 1)],
                matrix[(i, 2)],
                matrix[(i, 3)],
            )
        };
        let (x0, y0, z0, w0) = row(0);
        let (x1, y1, z1, w1) = row(1);
        let (x2, y2, z2, w2) = row(2);
        let (x3, y3, z3, w3) = row(3);

        Self {
            planes: [
                // left: w + x >= 0
                Plane::from_coefficients(x3 + x0, y3 + y0, z3 + z0, w3 + w0),
                // right: w - x >= 0
                Plane::from_coefficients(x3 - x0, y3 - y0, z3 - z0, w3 - w0),
                // bottom: w + y >= 0
                Plane::from_coefficients(x3 + x1, y3 + y1, z3 + z1, w3 + w1),
                // top: w - y >= 0
                Plane::from_coefficients(x3 - x1, y3 - y1, z3 - z1, w3 - w1),
                // near: w + z >= 0
                Plane::from_coefficients(x3 + x2, y3 + y2, z3 + z2, w3 + w2),
                // far: w - z >= 0
                Plane::from_coefficients(x3 - x2, y3 - y2, z3 - z2, w3 - w2),
            ],
        }
    }

    /// Check if a sphere is inside or intersects the frustum
    ///
    /// Standard plane-sphere rejection: the sphere is outside iff it lies
    /// entirely on the negative side of any one plane.
    pub fn intersects_sphere(&self, center: Point3, radius: f32) -> bool {
        for plane in &self.planes {
            if plane.distance_to_point(center) < -radius {
                return false;
            }
        }
        true
    }
}
