//! Serialized representation of a primitive
//!
//! A [`Record`] is the JSON projection of one primitive: id, name, type tag,
//! position/rotation as xyz triples, color as a hex string, and a
//! `primitive_specific` payload with the shape dimensions.

use crate::scene::{Primitive, SceneNode, Shape};
use egui::Color32;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An xyz triple as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Vec3Data {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3Data> for Vec3 {
    fn from(v: Vec3Data) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Shape-specific record payload, tagged by the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "primitive_specific", rename_all = "lowercase")]
pub enum ShapeData {
    Cube { length: f32, width: f32, height: f32 },
    Sphere { radius: f32 },
}

impl From<Shape> for ShapeData {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Cube {
                length,
                width,
                height,
            } => ShapeData::Cube {
                length,
                width,
                height,
            },
            Shape::Sphere { radius } => ShapeData::Sphere { radius },
        }
    }
}

impl From<ShapeData> for Shape {
    fn from(data: ShapeData) -> Self {
        match data {
            ShapeData::Cube {
                length,
                width,
                height,
            } => Shape::Cube {
                length,
                width,
                height,
            },
            ShapeData::Sphere { radius } => Shape::Sphere { radius },
        }
    }
}

/// One persisted primitive
///
/// Rotation is stored as Euler angles in degrees, the same representation
/// the rotation editor fields use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub position: Vec3Data,
    pub rotation: Vec3Data,
    pub color: String,
    #[serde(flatten)]
    pub shape: ShapeData,
}

impl Record {
    /// Project a primitive and its scene node into a record
    pub fn from_primitive(primitive: &Primitive, node: &SceneNode) -> Self {
        Self {
            id: primitive.record_id,
            name: primitive.name.clone(),
            position: node.transform.translation.into(),
            rotation: node.transform.rotation_euler_degrees().into(),
            color: color_to_hex(node.material.diffuse),
            shape: primitive.shape.into(),
        }
    }
}

/// Format a color as a `#rrggbb` hex string (alpha is not persisted)
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse a `#rrggbb` hex string, returning `None` if it is malformed
pub fn color_from_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PrimitiveKind;

    fn sample_primitive() -> (Primitive, SceneNode) {
        let mut node = SceneNode::default();
        node.transform.translation = Vec3::new(1.5, -2.0, 3.25);
        node.transform
            .set_rotation_euler_degrees(Vec3::new(10.0, 20.0, 30.0));
        node.material.diffuse = Color32::from_rgb(0xaa, 0xbb, 0xcc);
        let primitive = Primitive {
            record_id: None,
            name: "Cube 1".to_string(),
            node: 0,
            shape: Shape::Cube {
                length: 3.5,
                width: 1.0,
                height: 2.0,
            },
        };
        (primitive, node)
    }

    #[test]
    fn record_json_has_expected_fields() {
        let (primitive, node) = sample_primitive();
        let record = Record::from_primitive(&primitive, &node);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], "cube");
        assert_eq!(value["name"], "Cube 1");
        assert_eq!(value["color"], "#aabbcc");
        assert_eq!(value["position"]["x"], 1.5);
        assert_eq!(value["primitive_specific"]["length"], 3.5);
        // never-persisted primitives serialize without an id
        assert!(value.get("id").is_none());
    }

    #[test]
    fn record_round_trips_through_json() {
        let (primitive, node) = sample_primitive();
        let record = Record::from_primitive(&primitive, &node);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn restored_fields_match_within_tolerance() {
        let (primitive, node) = sample_primitive();
        let record = Record::from_primitive(&primitive, &node);

        // rebuild a node from the record the way the store's restore path does
        let mut restored = SceneNode::default();
        restored.transform.translation = record.position.into();
        restored
            .transform
            .set_rotation_euler_degrees(record.rotation.into());
        restored.material.diffuse = color_from_hex(&record.color).unwrap();

        let delta = (restored.transform.translation - node.transform.translation).abs();
        assert!(delta.max_element() < 1e-5);
        let euler = restored.transform.rotation_euler_degrees() - node.transform.rotation_euler_degrees();
        assert!(euler.abs().max_element() < 1e-3);
        assert_eq!(restored.material.diffuse, node.material.diffuse);
        assert_eq!(Shape::from(record.shape), primitive.shape);
    }

    #[test]
    fn sphere_payload_round_trips() {
        let shape = Shape::default_for(PrimitiveKind::Sphere);
        let data: ShapeData = shape.into();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["type"], "sphere");
        assert_eq!(json["primitive_specific"]["radius"], 2.0);
        assert_eq!(Shape::from(data), shape);
    }

    #[test]
    fn hex_color_helpers() {
        assert_eq!(color_to_hex(Color32::from_rgb(0, 128, 255)), "#0080ff");
        assert_eq!(
            color_from_hex("#0080ff"),
            Some(Color32::from_rgb(0, 128, 255))
        );
        assert_eq!(color_from_hex("0080ff"), None);
        assert_eq!(color_from_hex("#0080f"), None);
        assert_eq!(color_from_hex("#zzzzzz"), None);
        // six bytes of multibyte UTF-8 must not slice mid-character
        assert_eq!(color_from_hex("#ああ"), None);
        assert_eq!(color_from_hex("#0080fé"), None);
    }
}
