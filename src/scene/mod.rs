//! Scene model: primitives, the scene graph they attach to, and the store
//! that ties both to persistence.

pub mod graph;
pub mod primitive;
pub mod store;

pub use graph::{Material, SceneGraph, SceneNode, SceneNodeId, Transform};
pub use primitive::{Primitive, PrimitiveId, PrimitiveKind, Shape};
pub use store::PrimitiveStore;
