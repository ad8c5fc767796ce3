//! Primitive object model
//!
//! A primitive is a namable, colorable 3D shape. The closed set of shapes
//! (cube, sphere) is a tagged variant; position, rotation and color are
//! delegated to the primitive's scene node.

use crate::constants::primitive::{DEFAULT_CUBE_EXTENTS, DEFAULT_SPHERE_RADIUS};
use crate::scene::graph::SceneNodeId;
use std::fmt;
use uuid::Uuid;

/// Runtime handle for a primitive within a [`PrimitiveStore`](crate::scene::PrimitiveStore).
///
/// Distinct from the persisted record id: it is only valid for the lifetime
/// of the store that allocated it.
pub type PrimitiveId = u64;

/// The closed set of primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cube,
    Sphere,
}

impl PrimitiveKind {
    /// Type tag used in persisted records
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::Cube => write!(f, "Cube"),
            PrimitiveKind::Sphere => write!(f, "Sphere"),
        }
    }
}

/// Shape-specific dimensions of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cube { length: f32, width: f32, height: f32 },
    Sphere { radius: f32 },
}

impl Shape {
    /// Default shape for a kind, matching the dimensions new objects get
    pub fn default_for(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Cube => {
                let [length, width, height] = DEFAULT_CUBE_EXTENTS;
                Shape::Cube {
                    length,
                    width,
                    height,
                }
            }
            PrimitiveKind::Sphere => Shape::Sphere {
                radius: DEFAULT_SPHERE_RADIUS,
            },
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Shape::Cube { .. } => PrimitiveKind::Cube,
            Shape::Sphere { .. } => PrimitiveKind::Sphere,
        }
    }
}

/// A primitive object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Persisted record identifier. `None` until first saved, thereafter
    /// stable and unique.
    pub record_id: Option<Uuid>,
    /// Display name shown in the object list
    pub name: String,
    /// Scene node carrying this primitive's transform and material
    pub node: SceneNodeId,
    pub shape: Shape,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shapes_match_kind() {
        let cube = Shape::default_for(PrimitiveKind::Cube);
        assert_eq!(cube.kind(), PrimitiveKind::Cube);
        assert_eq!(
            cube,
            Shape::Cube {
                length: 1.0,
                width: 1.0,
                height: 1.0
            }
        );

        let sphere = Shape::default_for(PrimitiveKind::Sphere);
        assert_eq!(sphere.kind(), PrimitiveKind::Sphere);
        assert_eq!(sphere, Shape::Sphere { radius: 2.0 });
    }

    #[test]
    fn type_names_are_record_tags() {
        assert_eq!(PrimitiveKind::Cube.type_name(), "cube");
        assert_eq!(PrimitiveKind::Sphere.type_name(), "sphere");
    }
}
