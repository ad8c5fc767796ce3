//! Properties panel
//!
//! Two-way binding between the editor fields and the selected primitive.
//! Numeric fields are buffered as text: every change is parsed as a float
//! and applied through the store's setters (which persist), a failed parse
//! is silently ignored and the field keeps its text until corrected.

use crate::constants::ui::NUMERIC_FIELD_WIDTH;
use crate::constants::DISPLAY_DECIMALS;
use crate::scene::{PrimitiveId, PrimitiveKind, PrimitiveStore, Shape};
use egui::{RichText, TextEdit};
use glam::Vec3;
use log::error;

/// What the user did in the properties panel this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertiesAction {
    None,
    /// The selected primitive was deleted
    Deleted,
}

/// Text buffers for the currently edited primitive
struct FieldBuffers {
    primitive: PrimitiveId,
    name: String,
    position: [String; 3],
    rotation: [String; 3],
    shape: ShapeBuffers,
}

enum ShapeBuffers {
    Cube {
        length: String,
        width: String,
        height: String,
    },
    Sphere {
        radius: String,
    },
}

impl FieldBuffers {
    fn from_store(store: &PrimitiveStore, id: PrimitiveId) -> Option<Self> {
        let primitive = store.get(id)?;
        let position = store.position(id)?;
        let rotation = store.rotation_euler(id)?;
        let shape = match primitive.shape {
            Shape::Cube {
                length,
                width,
                height,
            } => ShapeBuffers::Cube {
                length: display_rounded(length),
                width: display_rounded(width),
                height: display_rounded(height),
            },
            Shape::Sphere { radius } => ShapeBuffers::Sphere {
                radius: display_rounded(radius),
            },
        };
        Some(Self {
            primitive: id,
            name: primitive.name.clone(),
            position: vec3_buffers(position),
            rotation: vec3_buffers(rotation),
            shape,
        })
    }
}

/// Right-hand panel: property editor for the selected primitive
pub struct PropertiesPanel {
    fields: Option<FieldBuffers>,
}

impl PropertiesPanel {
    pub fn new() -> Self {
        Self { fields: None }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        store: &mut PrimitiveStore,
        selected: Option<PrimitiveId>,
    ) -> PropertiesAction {
        // nothing selected (or a stale selection): show the placeholder
        let id = match selected {
            Some(id) if store.get(id).is_some() => id,
            _ => {
                self.fields = None;
                ui.label(RichText::new("No object selected").italics());
                return PropertiesAction::None;
            }
        };

        // the buffers belong to exactly one primitive; swap them out when
        // the selection changes
        let stale = self
            .fields
            .as_ref()
            .map(|fields| fields.primitive != id)
            .unwrap_or(true);
        if stale {
            self.fields = FieldBuffers::from_store(store, id);
        }

        if ui.button("Delete").clicked() {
            if let Err(e) = store.remove(id) {
                error!("failed to delete primitive: {}", e);
            }
            self.fields = None;
            return PropertiesAction::Deleted;
        }

        let Some(fields) = self.fields.as_mut() else {
            return PropertiesAction::None;
        };

        ui.label("Name");
        if ui.text_edit_singleline(&mut fields.name).changed() {
            if let Err(e) = store.set_name(id, fields.name.clone()) {
                error!("failed to rename primitive: {}", e);
            }
        }

        ui.label("Color");
        if let Some(mut color) = store.color(id) {
            if ui.color_edit_button_srgba(&mut color).changed() {
                if let Err(e) = store.set_color(id, color) {
                    error!("failed to set color: {}", e);
                }
            }
        }

        ui.label("Position");
        if let Some(axis_values) = vec3_row(ui, &mut fields.position) {
            if let Some(mut position) = store.position(id) {
                apply_axes(&mut position, axis_values);
                if let Err(e) = store.set_position(id, position) {
                    error!("failed to set position: {}", e);
                }
            }
        }

        ui.label("Rotation");
        if let Some(axis_values) = vec3_row(ui, &mut fields.rotation) {
            if let Some(mut rotation) = store.rotation_euler(id) {
                apply_axes(&mut rotation, axis_values);
                if let Err(e) = store.set_rotation(id, rotation) {
                    error!("failed to set rotation: {}", e);
                }
            }
        }

        ui.separator();
        match store.get(id).map(|p| p.kind()) {
            Some(PrimitiveKind::Cube) => self.cube_fields(ui, store, id),
            Some(PrimitiveKind::Sphere) => self.sphere_fields(ui, store, id),
            None => {}
        }

        PropertiesAction::None
    }

    fn cube_fields(&mut self, ui: &mut egui::Ui, store: &mut PrimitiveStore, id: PrimitiveId) {
        let Some(FieldBuffers {
            shape:
                ShapeBuffers::Cube {
                    length,
                    width,
                    height,
                },
            ..
        }) = self.fields.as_mut()
        else {
            return;
        };

        if let Some(value) = numeric_field(ui, "Length", length) {
            if let Err(e) = store.set_length(id, value) {
                error!("failed to set length: {}", e);
            }
        }
        if let Some(value) = numeric_field(ui, "Width", width) {
            if let Err(e) = store.set_width(id, value) {
                error!("failed to set width: {}", e);
            }
        }
        if let Some(value) = numeric_field(ui, "Height", height) {
            if let Err(e) = store.set_height(id, value) {
                error!("failed to set height: {}", e);
            }
        }
    }

    fn sphere_fields(&mut self, ui: &mut egui::Ui, store: &mut PrimitiveStore, id: PrimitiveId) {
        let Some(FieldBuffers {
            shape: ShapeBuffers::Sphere { radius },
            ..
        }) = self.fields.as_mut()
        else {
            return;
        };

        if let Some(value) = numeric_field(ui, "Radius", radius) {
            if let Err(e) = store.set_radius(id, value) {
                error!("failed to set radius: {}", e);
            }
        }
    }
}

impl Default for PropertiesPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an edited field as a float, `None` if the text is not a number
fn parse_field(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok()
}

/// A labeled single numeric field. Returns the parsed value if the text
/// changed this frame and parses, `None` otherwise.
fn numeric_field(ui: &mut egui::Ui, label: &str, buffer: &mut String) -> Option<f32> {
    ui.label(label);
    let response = ui.add(TextEdit::singleline(buffer).desired_width(NUMERIC_FIELD_WIDTH));
    if response.changed() {
        parse_field(buffer)
    } else {
        None
    }
}

/// One row of X/Y/Z fields. Returns which axes changed to a valid number.
fn vec3_row(ui: &mut egui::Ui, buffers: &mut [String; 3]) -> Option<[Option<f32>; 3]> {
    let mut changed = [None, None, None];
    let mut any = false;
    ui.horizontal(|ui| {
        for (axis, buffer) in ["X", "Y", "Z"].iter().zip(buffers.iter_mut()) {
            ui.label(*axis);
            let response = ui.add(TextEdit::singleline(buffer).desired_width(NUMERIC_FIELD_WIDTH));
            if response.changed() {
                if let Some(value) = parse_field(buffer) {
                    let index = match *axis {
                        "X" => 0,
                        "Y" => 1,
                        _ => 2,
                    };
                    changed[index] = Some(value);
                    any = true;
                }
            }
        }
    });
    any.then_some(changed)
}

fn apply_axes(target: &mut Vec3, axes: [Option<f32>; 3]) {
    if let Some(x) = axes[0] {
        target.x = x;
    }
    if let Some(y) = axes[1] {
        target.y = y;
    }
    if let Some(z) = axes[2] {
        target.z = z;
    }
}

fn vec3_buffers(v: Vec3) -> [String; 3] {
    [
        display_rounded(v.x),
        display_rounded(v.y),
        display_rounded(v.z),
    ]
}

/// Format a value for display, rounded to [`DISPLAY_DECIMALS`] places
pub fn display_rounded(value: f32) -> String {
    let factor = 10f64.powi(DISPLAY_DECIMALS);
    let rounded = (value as f64 * factor).round() / factor;
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_accepts_floats() {
        assert_eq!(parse_field("3.5"), Some(3.5));
        assert_eq!(parse_field(" -2 "), Some(-2.0));
        // zero is a valid entry, not a missing value
        assert_eq!(parse_field("0"), Some(0.0));
    }

    #[test]
    fn parse_field_rejects_garbage() {
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("1.2.3"), None);
    }

    #[test]
    fn display_rounding_is_five_decimals() {
        assert_eq!(display_rounded(2.0), "2");
        assert_eq!(display_rounded(1.2345678), "1.23457");
        assert_eq!(display_rounded(-0.000004), "-0");
    }

    #[test]
    fn apply_axes_only_touches_changed_components() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        apply_axes(&mut v, [None, Some(5.0), None]);
        assert_eq!(v, Vec3::new(1.0, 5.0, 3.0));
    }
}
