//! Scenebox core library
//!
//! A small 3D primitive scene editor: cubes and spheres with editable
//! transform, color and dimensions, persisted to a local JSON document
//! collection.

pub mod constants;
pub mod editor;
pub mod persistence;
pub mod scene;

// Re-export commonly used types
pub use editor::SceneboxApp;
pub use persistence::{Collection, Record};
pub use scene::{Primitive, PrimitiveId, PrimitiveKind, PrimitiveStore, Shape};
