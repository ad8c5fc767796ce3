//! Primitive store
//!
//! Owns the in-memory primitives, the scene graph they are attached to, and
//! the document collection backing them. Field setters mutate the object and
//! then persist it, so every accepted edit is flushed to disk immediately.

use crate::constants::primitive::{CUBE_NODE_SCALE, DEFAULT_NODE_SCALE};
use crate::persistence::{color_from_hex, Collection, Record};
use crate::scene::graph::{SceneGraph, SceneNode};
use crate::scene::primitive::{Primitive, PrimitiveId, PrimitiveKind, Shape};
use egui::Color32;
use glam::Vec3;
use log::{debug, warn};
use std::collections::HashMap;

/// Registry of live primitives backed by a JSON document collection
pub struct PrimitiveStore {
    scene: SceneGraph,
    primitives: HashMap<PrimitiveId, Primitive>,
    /// Creation order, drives the object list
    order: Vec<PrimitiveId>,
    collection: Collection,
    next_primitive_id: PrimitiveId,
    /// Per-kind display name counters. Monotonic for the store's lifetime,
    /// advanced on every construction (restores included), never reset on
    /// deletion.
    cube_counter: u32,
    sphere_counter: u32,
    /// Set while restoring from disk so setters skip the persist step
    restoring: bool,
}

impl PrimitiveStore {
    pub fn new(collection: Collection) -> Self {
        Self {
            scene: SceneGraph::new(),
            primitives: HashMap::new(),
            order: Vec::new(),
            collection,
            next_primitive_id: 0,
            cube_counter: 1,
            sphere_counter: 1,
            restoring: false,
        }
    }

    /// Reconstruct every persisted primitive without re-persisting it
    pub fn restore_all(&mut self) {
        let records: Vec<Record> = self.collection.all().to_vec();
        for record in records {
            self.restore(record);
        }
    }

    /// Create a new primitive with defaults and persist it immediately
    pub fn create(&mut self, kind: PrimitiveKind) -> Result<PrimitiveId, String> {
        let id = self.insert_primitive(None, kind);
        self.persist(id)?;
        Ok(id)
    }

    /// Rebuild one primitive from its record, without writing back to disk
    fn restore(&mut self, record: Record) {
        let kind = Shape::from(record.shape).kind();
        let id = self.insert_primitive(record.id, kind);

        self.restoring = true;
        // errors cannot occur here: the primitive was just inserted and the
        // persist step is skipped while restoring
        let _ = self.set_position(id, record.position.into());
        let _ = self.set_rotation(id, record.rotation.into());
        match color_from_hex(&record.color) {
            Some(color) => {
                let _ = self.set_color(id, color);
            }
            None => warn!("record {:?} has invalid color {:?}", record.name, record.color),
        }
        let _ = self.set_name(id, record.name);
        match Shape::from(record.shape) {
            Shape::Cube {
                length,
                width,
                height,
            } => {
                let _ = self.set_length(id, length);
                let _ = self.set_width(id, width);
                let _ = self.set_height(id, height);
            }
            Shape::Sphere { radius } => {
                let _ = self.set_radius(id, radius);
            }
        }
        self.restoring = false;
    }

    /// Allocate the primitive, its scene node, and its default name
    fn insert_primitive(&mut self, record_id: Option<uuid::Uuid>, kind: PrimitiveKind) -> PrimitiveId {
        let node = self.scene.attach();
        if let Some(scene_node) = self.scene.get_mut(node) {
            scene_node.transform.scale = match kind {
                PrimitiveKind::Cube => CUBE_NODE_SCALE,
                PrimitiveKind::Sphere => DEFAULT_NODE_SCALE,
            };
        }

        let name = self.next_name(kind);
        let id = self.next_primitive_id;
        self.next_primitive_id += 1;

        self.primitives.insert(
            id,
            Primitive {
                record_id,
                name,
                node,
                shape: Shape::default_for(kind),
            },
        );
        self.order.push(id);
        id
    }

    /// Delete a primitive: backing record first (no-op if never persisted),
    /// then the scene node, then the object itself
    pub fn remove(&mut self, id: PrimitiveId) -> Result<(), String> {
        let record_id = self
            .primitives
            .get(&id)
            .ok_or_else(|| format!("unknown primitive {}", id))?
            .record_id;

        // Record goes first; a failed flush must leave the object intact
        if let Some(record_id) = record_id {
            self.collection.delete(record_id)?;
        }

        let primitive = self
            .primitives
            .remove(&id)
            .ok_or_else(|| format!("unknown primitive {}", id))?;
        self.order.retain(|&other| other != id);

        self.scene.set_enabled(primitive.node, false);
        self.scene.detach(primitive.node);
        Ok(())
    }

    /// Primitive ids in creation order
    pub fn ids(&self) -> &[PrimitiveId] {
        &self.order
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(&id)
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ------------------------------------------------------------------
    // Getters that read through the scene node
    // ------------------------------------------------------------------

    pub fn position(&self, id: PrimitiveId) -> Option<Vec3> {
        let primitive = self.primitives.get(&id)?;
        Some(self.scene.get(primitive.node)?.transform.translation)
    }

    /// Rotation as Euler angles in degrees
    pub fn rotation_euler(&self, id: PrimitiveId) -> Option<Vec3> {
        let primitive = self.primitives.get(&id)?;
        Some(self.scene.get(primitive.node)?.transform.rotation_euler_degrees())
    }

    pub fn color(&self, id: PrimitiveId) -> Option<Color32> {
        let primitive = self.primitives.get(&id)?;
        Some(self.scene.get(primitive.node)?.material.diffuse)
    }

    // ------------------------------------------------------------------
    // Setters: mutate, then persist
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, id: PrimitiveId, name: String) -> Result<(), String> {
        let primitive = self.primitive_mut(id)?;
        primitive.name = name;
        self.persist(id)
    }

    pub fn set_position(&mut self, id: PrimitiveId, position: Vec3) -> Result<(), String> {
        let node = self.node_mut(id)?;
        node.transform.translation = position;
        self.persist(id)
    }

    /// Set the rotation from Euler angles in degrees
    pub fn set_rotation(&mut self, id: PrimitiveId, euler_degrees: Vec3) -> Result<(), String> {
        let node = self.node_mut(id)?;
        node.transform.set_rotation_euler_degrees(euler_degrees);
        self.persist(id)
    }

    pub fn set_color(&mut self, id: PrimitiveId, color: Color32) -> Result<(), String> {
        let node = self.node_mut(id)?;
        node.material.diffuse = color;
        self.persist(id)
    }

    pub fn set_length(&mut self, id: PrimitiveId, value: f32) -> Result<(), String> {
        self.set_cube_extent(id, value, |shape| match shape {
            Shape::Cube { length, .. } => Some(length),
            _ => None,
        })
    }

    pub fn set_width(&mut self, id: PrimitiveId, value: f32) -> Result<(), String> {
        self.set_cube_extent(id, value, |shape| match shape {
            Shape::Cube { width, .. } => Some(width),
            _ => None,
        })
    }

    pub fn set_height(&mut self, id: PrimitiveId, value: f32) -> Result<(), String> {
        self.set_cube_extent(id, value, |shape| match shape {
            Shape::Cube { height, .. } => Some(height),
            _ => None,
        })
    }

    pub fn set_radius(&mut self, id: PrimitiveId, radius: f32) -> Result<(), String> {
        if !(radius > 0.0) {
            debug!("ignoring non-positive radius {}", radius);
            return Ok(());
        }
        let primitive = self.primitive_mut(id)?;
        match &mut primitive.shape {
            Shape::Sphere { radius: slot } => *slot = radius,
            _ => return Err(format!("primitive {} is not a sphere", id)),
        }
        self.persist(id)
    }

    fn set_cube_extent(
        &mut self,
        id: PrimitiveId,
        value: f32,
        extent: impl FnOnce(&mut Shape) -> Option<&mut f32>,
    ) -> Result<(), String> {
        if !(value > 0.0) {
            debug!("ignoring non-positive extent {}", value);
            return Ok(());
        }
        let primitive = self.primitive_mut(id)?;
        match extent(&mut primitive.shape) {
            Some(slot) => *slot = value,
            None => return Err(format!("primitive {} is not a cube", id)),
        }
        self.persist(id)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the primitive and write it through to the collection.
    /// First persist inserts and captures the assigned record id, later
    /// persists update the existing record in place.
    fn persist(&mut self, id: PrimitiveId) -> Result<(), String> {
        if self.restoring {
            return Ok(());
        }

        let primitive = self
            .primitives
            .get(&id)
            .ok_or_else(|| format!("unknown primitive {}", id))?;
        let node = self
            .scene
            .get(primitive.node)
            .ok_or_else(|| format!("primitive {} has no scene node", id))?;
        let record = Record::from_primitive(primitive, node);

        match primitive.record_id {
            None => {
                let record_id = self.collection.insert(record)?;
                if let Some(primitive) = self.primitives.get_mut(&id) {
                    primitive.record_id = Some(record_id);
                }
                Ok(())
            }
            Some(_) => self.collection.update(&record),
        }
    }

    fn next_name(&mut self, kind: PrimitiveKind) -> String {
        let counter = match kind {
            PrimitiveKind::Cube => &mut self.cube_counter,
            PrimitiveKind::Sphere => &mut self.sphere_counter,
        };
        let name = format!("{} {}", kind, *counter);
        *counter += 1;
        name
    }

    fn primitive_mut(&mut self, id: PrimitiveId) -> Result<&mut Primitive, String> {
        self.primitives
            .get_mut(&id)
            .ok_or_else(|| format!("unknown primitive {}", id))
    }

    fn node_mut(&mut self, id: PrimitiveId) -> Result<&mut SceneNode, String> {
        let node = self
            .primitives
            .get(&id)
            .ok_or_else(|| format!("unknown primitive {}", id))?
            .node;
        self.scene
            .get_mut(node)
            .ok_or_else(|| format!("primitive {} has no scene node", id))
    }
}
