//! Minimal retained scene graph
//!
//! The editor does not own a real 3D engine; it keeps a flat registry of
//! scene nodes, each carrying a transform and a material. Primitives hold a
//! `SceneNodeId` and delegate position/rotation/color to their node, the
//! viewport reads the nodes back when painting.

use crate::constants::primitive::{DEFAULT_DIFFUSE, DEFAULT_NODE_SCALE};
use egui::Color32;
use glam::{EulerRot, Quat, Vec3};
use std::collections::HashMap;

/// Unique identifier for a scene node, valid for the lifetime of the graph
pub type SceneNodeId = u64;

/// Rigid transform of a scene node
///
/// Rotation is stored as a unit quaternion; Euler angles (XYZ order, degrees)
/// are only used at the editor/persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    /// Uniform render scale. Not editable and not persisted.
    pub scale: f32,
}

impl Transform {
    /// Rotation as Euler angles in degrees (XYZ order)
    pub fn rotation_euler_degrees(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }

    /// Set the rotation from Euler angles in degrees (XYZ order)
    pub fn set_rotation_euler_degrees(&mut self, euler: Vec3) {
        self.rotation = Quat::from_euler(
            EulerRot::XYZ,
            euler.x.to_radians(),
            euler.y.to_radians(),
            euler.z.to_radians(),
        );
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: DEFAULT_NODE_SCALE,
        }
    }
}

/// Surface properties of a scene node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: DEFAULT_DIFFUSE,
        }
    }
}

/// A single node in the scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub transform: Transform,
    pub material: Material,
    /// Disabled nodes are skipped by the viewport
    pub enabled: bool,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            material: Material::default(),
            enabled: true,
        }
    }
}

/// Flat registry of scene nodes addressed by id
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: HashMap<SceneNodeId, SceneNode>,
    next_id: SceneNodeId,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new node with default transform and material, returning its id
    pub fn attach(&mut self) -> SceneNodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, SceneNode::default());
        id
    }

    /// Remove a node from the graph, returning it if it existed
    pub fn detach(&mut self, id: SceneNodeId) -> Option<SceneNode> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: SceneNodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Enable or disable a node without detaching it
    pub fn set_enabled(&mut self, id: SceneNodeId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.enabled = enabled;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_assigns_unique_ids() {
        let mut graph = SceneGraph::new();
        let a = graph.attach();
        let b = graph.attach();
        assert_ne!(a, b);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn detach_removes_node() {
        let mut graph = SceneGraph::new();
        let id = graph.attach();
        assert!(graph.detach(id).is_some());
        assert!(graph.get(id).is_none());
        assert!(graph.detach(id).is_none());
    }

    #[test]
    fn set_enabled_toggles_node() {
        let mut graph = SceneGraph::new();
        let id = graph.attach();
        assert!(graph.get(id).unwrap().enabled);
        graph.set_enabled(id, false);
        assert!(!graph.get(id).unwrap().enabled);
    }

    #[test]
    fn euler_degrees_round_trip() {
        let mut transform = Transform::default();
        transform.set_rotation_euler_degrees(Vec3::new(10.0, 20.0, 30.0));
        let euler = transform.rotation_euler_degrees();
        assert!((euler.x - 10.0).abs() < 1e-3);
        assert!((euler.y - 20.0).abs() < 1e-3);
        assert!((euler.z - 30.0).abs() < 1e-3);
    }
}
