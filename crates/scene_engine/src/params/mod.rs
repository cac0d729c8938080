//! Shader parameter registry
//!
//! Upstream rendering setup publishes named, typed values (scalars, vectors,
//! matrices) into a [`ParamRegistry`]; scene nodes read the current values at
//! render time. The registry is an explicit object owned by the rendering
//! context and passed into traversal, so the scene layer stays testable in
//! isolation and never touches ambient global state.
//!
//! Values are expected to be overwritten between frames (camera and model
//! matrices change every frame), which is why consumers must not cache a
//! looked-up value across frames.

use std::collections::HashMap;

use crate::foundation::math::{Mat3, Mat4, Vec2, Vec3, Vec4};

/// A typed shader parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Scalar value
    Float(f32),
    /// 2D vector value
    Vec2(Vec2),
    /// 3D vector value
    Vec3(Vec3),
    /// 4D vector value
    Vec4(Vec4),
    /// 3x3 matrix value
    Mat3(Mat3),
    /// 4x4 matrix value
    Mat4(Mat4),
}

impl ParamValue {
    /// Short type tag for log messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Vec2(_) => "vec2",
            Self::Vec3(_) => "vec3",
            Self::Vec4(_) => "vec4",
            Self::Mat3(_) => "mat3",
            Self::Mat4(_) => "mat4",
        }
    }

    /// Get the contained 4x4 matrix, if this value is one
    pub fn as_mat4(&self) -> Option<&Mat4> {
        match self {
            Self::Mat4(matrix) => Some(matrix),
            _ => None,
        }
    }
}

/// Mapping from parameter name to its current typed value
///
/// Lookup is `O(1)` expected and takes `&self`, so it is safe to call
/// mid-traversal without invalidating other in-flight lookups.
#[derive(Debug, Clone, Default)]
pub struct ParamRegistry {
    params: HashMap<String, ParamValue>,
}

impl ParamRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value (of any type)
    pub fn set(&mut self, name: impl Into<String>, value: ParamValue) {
        self.params.insert(name.into(), value);
    }

    /// Look up the current value of a parameter
    pub fn lookup(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Remove a parameter, returning its last value
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.params.remove(name)
    }

    /// Check whether a parameter is set
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of parameters currently set
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Remove all parameters
    pub fn clear(&mut self) {
        self.params.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_lookup() {
        let mut registry = ParamRegistry::new();
        registry.set("view_proj", ParamValue::Mat4(Mat4::identity()));

        let value = registry.lookup("view_proj").expect("parameter was set");
        assert_eq!(value.as_mat4(), Some(&Mat4::identity()));
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn test_set_overwrites_type() {
        let mut registry = ParamRegistry::new();
        registry.set("time", ParamValue::Float(0.5));
        registry.set("time", ParamValue::Vec2(Vec2::new(1.0, 2.0)));

        let value = registry.lookup("time").expect("parameter was set");
        assert_eq!(value.type_name(), "vec2");
        assert!(value.as_mat4().is_none());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut registry = ParamRegistry::new();
        registry.set("a", ParamValue::Float(1.0));
        registry.set("b", ParamValue::Float(2.0));
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.remove("a"), Some(ParamValue::Float(1.0)));
        assert!(!registry.contains("a"));

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ParamValue::Float(0.0).type_name(), "float");
        assert_eq!(ParamValue::Vec3(Vec3::zeros()).type_name(), "vec3");
        assert_eq!(ParamValue::Mat4(Mat4::identity()).type_name(), "mat4");
    }
}
